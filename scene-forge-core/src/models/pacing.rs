use std::ops::Range;
use std::path::PathBuf;

use serde::Serialize;

/// A `self.wait(<literal>)` occurrence discovered by scanning file text.
///
/// `span` covers only the literal digits, not the call token or parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitDirective {
    pub value: f64,
    pub span: Range<usize>,
}

/// One literal that was replaced during a rewrite pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitRewrite {
    /// Value read from the source text.
    pub original: f64,
    /// Value of the literal written back, after one-digit rounding.
    pub rewritten: f64,
    /// Exact replacement text, e.g. `3.0`.
    pub literal: String,
    /// Span of the original literal in the input text.
    pub span: Range<usize>,
}

/// The five magnitude ranges used to lengthen a pacing literal.
///
/// Ranges are open below and closed above, checked in ascending order:
///
/// | bucket     | range            | delta |
/// |------------|------------------|-------|
/// | `Brief`    | `v <= 0.5`       | +0.3  |
/// | `Short`    | `0.5 < v <= 1.5` | +0.8  |
/// | `Medium`   | `1.5 < v <= 2.5` | +1.0  |
/// | `Long`     | `2.5 < v <= 3.5` | +1.0  |
/// | `Extended` | `v > 3.5`        | +1.5  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaceBucket {
    Brief,
    Short,
    Medium,
    Long,
    Extended,
}

impl PaceBucket {
    pub const ALL: [PaceBucket; 5] = [
        Self::Brief,
        Self::Short,
        Self::Medium,
        Self::Long,
        Self::Extended,
    ];

    /// Inclusive upper bound, `None` for the unbounded top bucket.
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            Self::Brief => Some(0.5),
            Self::Short => Some(1.5),
            Self::Medium => Some(2.5),
            Self::Long => Some(3.5),
            Self::Extended => None,
        }
    }

    pub fn delta(&self) -> f64 {
        match self {
            Self::Brief => 0.3,
            Self::Short => 0.8,
            Self::Medium => 1.0,
            Self::Long => 1.0,
            Self::Extended => 1.5,
        }
    }

    /// First bucket whose upper bound admits `value`.
    pub fn classify(value: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.upper_bound().map_or(true, |upper| value <= upper))
            .unwrap_or(Self::Extended)
    }
}

/// Per-file totals for one patch pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchReport {
    pub filename: String,
    pub path: PathBuf,
    /// Number of wait directives rewritten.
    pub calls: usize,
    /// Sum of `rewritten - original` over every rewrite, in seconds.
    pub added_seconds: f64,
    /// Whether the rewritten text was written back to disk.
    pub written: bool,
}

/// What happened to one patch target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PatchOutcome {
    Patched(PatchReport),
    /// The target did not exist; nothing was read or written.
    Skipped { filename: String, path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_take_lower_bucket() {
        assert_eq!(PaceBucket::classify(0.0), PaceBucket::Brief);
        assert_eq!(PaceBucket::classify(0.5), PaceBucket::Brief);
        assert_eq!(PaceBucket::classify(0.5000001), PaceBucket::Short);
        assert_eq!(PaceBucket::classify(1.5), PaceBucket::Short);
        assert_eq!(PaceBucket::classify(1.5000001), PaceBucket::Medium);
        assert_eq!(PaceBucket::classify(2.5), PaceBucket::Medium);
        assert_eq!(PaceBucket::classify(2.5000001), PaceBucket::Long);
        assert_eq!(PaceBucket::classify(3.5), PaceBucket::Long);
        assert_eq!(PaceBucket::classify(3.5000001), PaceBucket::Extended);
        assert_eq!(PaceBucket::classify(10.0), PaceBucket::Extended);
    }

    #[test]
    fn test_deltas() {
        let deltas: Vec<f64> = PaceBucket::ALL.iter().map(PaceBucket::delta).collect();
        assert_eq!(deltas, [0.3, 0.8, 1.0, 1.0, 1.5]);
    }
}
