//! Scene source assembly.
//!
//! A generated file is the header (parameterized by title), the class
//! skeleton (parameterized by class name), then the six section bodies in
//! slot order. Nothing is reformatted; payloads are copied byte-for-byte.

pub mod syntax;

use std::path::{Component, Path};

use scene_forge_core::models::{GeneratedFile, Topic};
use scene_forge_core::{ForgeError, InputReason};

const HEADER: &str = include_str!("header.py");
const SKELETON: &str = include_str!("skeleton.py");

/// Render the file preamble for `title`.
pub fn render_header(title: &str) -> String {
    HEADER.replace("{title}", title)
}

/// Render the scene class scaffold for `class_name`.
///
/// The scaffold dispatches `s1_hook` through `s6_summary` and defines the
/// shared helper methods the section bodies call.
pub fn render_skeleton(class_name: &str) -> String {
    SKELETON.replace("{class_name}", class_name)
}

/// Assemble the complete source text for `topic`.
///
/// Output is deterministic: identical topics always yield identical text.
pub fn assemble(topic: &Topic) -> Result<String, ForgeError> {
    validate(topic)?;

    let header = render_header(&topic.title);
    let skeleton = render_skeleton(&topic.class_name);
    let body_len: usize = topic.sections.iter().map(|(_, body)| body.len()).sum();

    let mut text = String::with_capacity(header.len() + skeleton.len() + body_len);
    text.push_str(&header);
    text.push_str(&skeleton);
    for (_, body) in topic.sections.iter() {
        text.push_str(body);
    }
    Ok(text)
}

/// Assemble `topic` into a file destined for `dir`.
pub fn assemble_file(topic: &Topic, dir: &Path) -> Result<GeneratedFile, ForgeError> {
    let text = assemble(topic)?;
    Ok(GeneratedFile {
        path: dir.join(&topic.filename),
        text,
    })
}

/// Reject topic data that would produce a broken source file.
pub fn validate(topic: &Topic) -> Result<(), ForgeError> {
    let input_err = |part: &str, reason: InputReason| ForgeError::Input {
        topic: topic.key.clone(),
        part: part.to_string(),
        reason,
    };

    if !is_bare_filename(&topic.filename) {
        return Err(input_err(
            "filename",
            InputReason::BadFilename(topic.filename.clone()),
        ));
    }
    if !is_identifier(&topic.class_name) {
        return Err(input_err(
            "class_name",
            InputReason::BadClassName(topic.class_name.clone()),
        ));
    }

    syntax::check(&render_header(&topic.title))
        .map_err(|issue| input_err("title", issue.into()))?;

    for (slot, body) in topic.sections.iter() {
        syntax::check(body).map_err(|issue| input_err(slot.as_str(), issue.into()))?;

        if !body.contains(&format!("def {}(", slot.method_name())) {
            tracing::warn!(
                topic = %topic.key,
                section = %slot,
                "section does not define {}()",
                slot.method_name()
            );
        }
    }

    Ok(())
}

fn is_bare_filename(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_forge_core::models::Sections;
    use scene_forge_core::SyntaxIssue;

    fn topic(sections: [&str; 6]) -> Topic {
        Topic {
            key: "demo".to_string(),
            filename: "demo.py".to_string(),
            class_name: "DemoScene".to_string(),
            title: "Demo".to_string(),
            sections: Sections::from_ordered(sections),
        }
    }

    #[test]
    fn test_header_substitutes_title() {
        let header = render_header("Gradient Descent");
        assert!(header.starts_with("\"\"\"\nFeynman – Gradient Descent (Gold Standard)\n"));
        assert!(header.contains("from manim import *\n"));
        assert!(!header.contains("{title}"));
    }

    #[test]
    fn test_skeleton_substitutes_class_name_only() {
        let skeleton = render_skeleton("DemoScene");
        assert!(skeleton.starts_with("\nclass DemoScene(Scene):\n"));
        assert!(skeleton.contains("axis_config={\"color\": AX_COLOR"));
        assert!(skeleton.contains("        self.s6_summary()\n"));
        assert!(!skeleton.contains("{class_name}"));
    }

    #[test]
    fn test_assemble_concatenates_in_order() {
        let text = assemble(&topic(["A", "B", "C", "D", "E", "F"])).expect("assemble");
        let prefix = render_header("Demo") + &render_skeleton("DemoScene");
        assert_eq!(text.strip_prefix(prefix.as_str()), Some("ABCDEF"));
    }

    #[test]
    fn test_assemble_rejects_unbalanced_section() {
        let err = assemble(&topic(["A", "B", "self.play(FadeIn(x)", "D", "E", "F"]))
            .expect_err("unbalanced section must be rejected");
        match err {
            ForgeError::Input {
                topic,
                part,
                reason,
            } => {
                assert_eq!(topic, "demo");
                assert_eq!(part, "notation");
                assert_eq!(
                    reason,
                    InputReason::Syntax(SyntaxIssue::Unclosed { open: '(', line: 1 })
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_names() {
        let mut bad = topic(["A", "B", "C", "D", "E", "F"]);
        bad.filename = "../escape.py".to_string();
        assert!(matches!(
            validate(&bad),
            Err(ForgeError::Input { reason: InputReason::BadFilename(_), .. })
        ));

        let mut bad = topic(["A", "B", "C", "D", "E", "F"]);
        bad.class_name = "Demo Scene".to_string();
        assert!(matches!(
            validate(&bad),
            Err(ForgeError::Input { reason: InputReason::BadClassName(_), .. })
        ));

        let mut bad = topic(["A", "B", "C", "D", "E", "F"]);
        bad.title = "Broken \"\"\" title".to_string();
        assert!(matches!(
            validate(&bad),
            Err(ForgeError::Input { ref part, .. }) if part == "title"
        ));
    }

    #[test]
    fn test_identifier_and_filename_rules() {
        assert!(is_identifier("_Scene2"));
        assert!(!is_identifier("2Scene"));
        assert!(!is_identifier(""));
        assert!(is_bare_filename("integral.py"));
        assert!(!is_bare_filename("scenes/integral.py"));
        assert!(!is_bare_filename(".."));
        assert!(!is_bare_filename(""));
    }
}
