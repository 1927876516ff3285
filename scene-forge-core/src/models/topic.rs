use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of generated content: a single output file holding a single
/// narrated-scene class.
///
/// Topics are static data. They are built once (from the content library or
/// a manifest file) and consumed read-only by the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique lookup key, e.g. `gradient_descent`.
    pub key: String,
    /// Bare file name written into the output directory.
    pub filename: String,
    /// Name of the generated scene class.
    pub class_name: String,
    /// Human title substituted into the file header.
    pub title: String,
    pub sections: Sections,
}

/// The six narrative payloads of a topic, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub hook: String,
    pub geometry: String,
    pub notation: String,
    pub example: String,
    pub insight: String,
    pub summary: String,
}

impl Sections {
    /// Build from six bodies given in slot order.
    pub fn from_ordered<S: Into<String>>(bodies: [S; 6]) -> Self {
        let [hook, geometry, notation, example, insight, summary]: [String; 6] =
            bodies.map(Into::into);
        Self {
            hook,
            geometry,
            notation,
            example,
            insight,
            summary,
        }
    }

    pub fn get(&self, slot: SectionSlot) -> &str {
        match slot {
            SectionSlot::Hook => &self.hook,
            SectionSlot::Geometry => &self.geometry,
            SectionSlot::Notation => &self.notation,
            SectionSlot::Example => &self.example,
            SectionSlot::Insight => &self.insight,
            SectionSlot::Summary => &self.summary,
        }
    }

    /// Iterate `(slot, body)` pairs in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionSlot, &str)> + '_ {
        SectionSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// A fixed narrative slot. The skeleton's `construct` dispatches to one
/// method per slot, in the order of [`SectionSlot::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSlot {
    Hook,
    Geometry,
    Notation,
    Example,
    Insight,
    Summary,
}

impl SectionSlot {
    pub const ALL: [SectionSlot; 6] = [
        Self::Hook,
        Self::Geometry,
        Self::Notation,
        Self::Example,
        Self::Insight,
        Self::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::Geometry => "geometry",
            Self::Notation => "notation",
            Self::Example => "example",
            Self::Insight => "insight",
            Self::Summary => "summary",
        }
    }

    /// Name of the skeleton method this slot's body must define.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Hook => "s1_hook",
            Self::Geometry => "s2_geometry",
            Self::Notation => "s3_notation",
            Self::Example => "s4_example",
            Self::Insight => "s5_insight",
            Self::Summary => "s6_summary",
        }
    }
}

impl fmt::Display for SectionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
