//! Built-in topic payloads.
//!
//! Section bodies live as data files under `topics/<key>/<slot>.py` and are
//! compiled in verbatim. Each file holds exactly one scene method.

use scene_forge_core::models::{Sections, Topic};

struct TopicSource {
    key: &'static str,
    filename: &'static str,
    class_name: &'static str,
    title: &'static str,
    /// Bodies in slot order: hook, geometry, notation, example, insight, summary.
    sections: [&'static str; 6],
}

const TOPICS: &[TopicSource] = &[
    TopicSource {
        key: "gradient_descent",
        filename: "ml_02_gradient_descent.py",
        class_name: "GradientDescentScene",
        title: "Gradient Descent",
        sections: [
            include_str!("topics/gradient_descent/hook.py"),
            include_str!("topics/gradient_descent/geometry.py"),
            include_str!("topics/gradient_descent/notation.py"),
            include_str!("topics/gradient_descent/example.py"),
            include_str!("topics/gradient_descent/insight.py"),
            include_str!("topics/gradient_descent/summary.py"),
        ],
    },
    TopicSource {
        key: "vectors",
        filename: "la_01_vectors.py",
        class_name: "VectorsScene",
        title: "Vectors",
        sections: [
            include_str!("topics/vectors/hook.py"),
            include_str!("topics/vectors/geometry.py"),
            include_str!("topics/vectors/notation.py"),
            include_str!("topics/vectors/example.py"),
            include_str!("topics/vectors/insight.py"),
            include_str!("topics/vectors/summary.py"),
        ],
    },
    TopicSource {
        key: "quicksort",
        filename: "algo_02_quicksort.py",
        class_name: "QuicksortScene",
        title: "Quicksort",
        sections: [
            include_str!("topics/quicksort/hook.py"),
            include_str!("topics/quicksort/geometry.py"),
            include_str!("topics/quicksort/notation.py"),
            include_str!("topics/quicksort/example.py"),
            include_str!("topics/quicksort/insight.py"),
            include_str!("topics/quicksort/summary.py"),
        ],
    },
    TopicSource {
        key: "integral",
        filename: "integral.py",
        class_name: "IntegralScene",
        title: "The Integral",
        sections: [
            include_str!("topics/integral/hook.py"),
            include_str!("topics/integral/geometry.py"),
            include_str!("topics/integral/notation.py"),
            include_str!("topics/integral/example.py"),
            include_str!("topics/integral/insight.py"),
            include_str!("topics/integral/summary.py"),
        ],
    },
    TopicSource {
        key: "game_theory",
        filename: "econ_05_game_theory.py",
        class_name: "GameTheoryScene",
        title: "Game Theory",
        sections: [
            include_str!("topics/game_theory/hook.py"),
            include_str!("topics/game_theory/geometry.py"),
            include_str!("topics/game_theory/notation.py"),
            include_str!("topics/game_theory/example.py"),
            include_str!("topics/game_theory/insight.py"),
            include_str!("topics/game_theory/summary.py"),
        ],
    },
];

impl TopicSource {
    fn to_topic(&self) -> Topic {
        Topic {
            key: self.key.to_string(),
            filename: self.filename.to_string(),
            class_name: self.class_name.to_string(),
            title: self.title.to_string(),
            sections: Sections::from_ordered(self.sections),
        }
    }
}

/// All built-in topics, in emission order.
pub fn builtin_topics() -> Vec<Topic> {
    TOPICS.iter().map(TopicSource::to_topic).collect()
}

/// Look up a built-in topic by key.
pub fn find(key: &str) -> Option<Topic> {
    TOPICS
        .iter()
        .find(|source| source.key == key)
        .map(TopicSource::to_topic)
}
