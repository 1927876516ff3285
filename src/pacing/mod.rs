//! Wait-literal pacing patcher.
//!
//! Finds every `self.wait(<literal>)` in a scene file and lengthens the
//! literal by the delta of its [`PaceBucket`]. Matching is purely lexical:
//! a matching call inside a comment or string is rewritten too.
//!
//! The transform does not converge. Each run re-classifies the already
//! lengthened values and adds another delta.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use scene_forge_core::models::{PaceBucket, PatchOutcome, PatchReport, WaitDirective, WaitRewrite};
use scene_forge_core::ForgeError;

use crate::emit;

/// Files lengthened by default, relative to the scene directory.
pub const DEFAULT_TARGETS: &[&str] = &[
    "algo_02_quicksort.py",
    "econ_05_game_theory.py",
    "la_04_dot_product.py",
    "la_05_cross_product.py",
    "la_09_shear.py",
    "la_10_projection.py",
    "la_12_span.py",
    "la_13_lin_indep.py",
    "la_14_basis.py",
    "la_15_change_of_basis.py",
    "la_17_svd.py",
    "la_18_null_space.py",
    "la_19_column_space.py",
    "la_20_row_reduction.py",
    "la_22_det_zero.py",
    "la_23_eigen_why.py",
    "phys_03_induction.py",
    "phys_04_maxwell.py",
];

static WAIT_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"self\.wait\((\d+(?:\.\d+)?)\)").expect("wait pattern is valid")
});

/// Whether a patch pass writes its result back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatchMode {
    #[default]
    Write,
    DryRun,
}

/// Find every wait directive in `text`, in source order.
pub fn scan(text: &str) -> Vec<WaitDirective> {
    WAIT_CALL
        .captures_iter(text)
        .filter_map(|caps| {
            let literal = caps.get(1)?;
            let value = literal.as_str().parse::<f64>().ok()?;
            Some(WaitDirective {
                value,
                span: literal.range(),
            })
        })
        .collect()
}

/// Lengthen one pacing value.
pub fn bump(value: f64) -> f64 {
    value + PaceBucket::classify(value).delta()
}

/// Render a value as a literal with exactly one fractional digit.
///
/// Integral values keep a trailing `.0` so the result is always a float
/// literal (`3.0`, never `3`).
pub fn render_literal(value: f64) -> String {
    format!("{value:.1}")
}

/// Rewrite every wait literal in `text`.
///
/// Returns the new text plus one [`WaitRewrite`] per replaced literal.
/// Everything outside the literal digits is copied unchanged.
pub fn rewrite(text: &str) -> (String, Vec<WaitRewrite>) {
    let mut out = String::with_capacity(text.len());
    let mut rewrites = Vec::new();
    let mut last = 0;

    for directive in scan(text) {
        if !directive.value.is_finite() {
            tracing::warn!(
                literal = &text[directive.span.clone()],
                "skipping wait literal that does not fit a float"
            );
            continue;
        }

        let literal = render_literal(bump(directive.value));
        let rewritten = literal.parse::<f64>().unwrap_or(directive.value);
        tracing::debug!(from = directive.value, to = %literal, "rewrite wait");

        out.push_str(&text[last..directive.span.start]);
        out.push_str(&literal);
        last = directive.span.end;

        rewrites.push(WaitRewrite {
            original: directive.value,
            rewritten,
            literal,
            span: directive.span,
        });
    }
    out.push_str(&text[last..]);

    (out, rewrites)
}

/// Patch one file in place.
///
/// A missing file is not an error: it yields [`PatchOutcome::Skipped`].
/// Any other read or write failure is returned.
pub fn patch_file(path: &Path, mode: PatchMode) -> Result<PatchOutcome, ForgeError> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let original = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "patch target not found, skipping");
            return Ok(PatchOutcome::Skipped {
                filename,
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(ForgeError::io(path, e)),
    };

    let (patched, rewrites) = rewrite(&original);
    let added_seconds = rewrites
        .iter()
        .fold(0.0, |total, r| total + (r.rewritten - r.original));

    let written = mode == PatchMode::Write;
    if written {
        emit::write_file(path, &patched)?;
    }
    tracing::info!(
        path = %path.display(),
        calls = rewrites.len(),
        added_seconds,
        written,
        "patched waits"
    );

    Ok(PatchOutcome::Patched(PatchReport {
        filename,
        path: path.to_path_buf(),
        calls: rewrites.len(),
        added_seconds,
        written,
    }))
}

/// Patch every target in order, calling `on_patched` after each one.
/// Relative targets resolve against `dir`.
///
/// Missing targets are skipped; the first other failure aborts the batch.
pub fn patch_all<S: AsRef<str>>(
    dir: &Path,
    targets: &[S],
    mode: PatchMode,
    mut on_patched: impl FnMut(&PatchOutcome),
) -> Result<Vec<PatchOutcome>, ForgeError> {
    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        let outcome = patch_file(&dir.join(target.as_ref()), mode)?;
        on_patched(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patched(text: &str) -> String {
        rewrite(text).0
    }

    #[test]
    fn test_boundary_table() {
        let cases = [
            ("0.0", "0.3"),
            ("0.5", "0.8"),
            ("0.5000001", "1.3"),
            ("0.50001", "1.3"),
            ("1.5", "2.3"),
            ("1.5000001", "2.5"),
            ("2.5", "3.5"),
            ("2.5000001", "3.5"),
            ("3.5", "4.5"),
            ("3.5000001", "5.0"),
            ("3.50001", "5.0"),
            ("10.0", "11.5"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                patched(&format!("self.wait({input})")),
                format!("self.wait({expected})"),
                "wait({input})"
            );
        }
    }

    #[test]
    fn test_integer_literals_gain_fraction() {
        assert_eq!(patched("self.wait(2)"), "self.wait(3.0)");
        assert_eq!(patched("self.wait(0)"), "self.wait(0.3)");
        assert_eq!(render_literal(3.0), "3.0");
        assert_eq!(render_literal(12.0), "12.0");
    }

    #[test]
    fn test_only_exact_call_shape_matches() {
        let text = "self.wait()\nself.wait(x)\nself.wait( 1.0 )\nwait(1.0)\nself.wait(1.)\nself.play(a, run_time=1.0)\n";
        assert_eq!(patched(text), text);
        assert!(scan(text).is_empty());
    }

    #[test]
    fn test_surrounding_text_is_preserved() {
        let text = "        self.play(FadeIn(t1), run_time=1.5); self.wait(0.5)\n        # self.wait(4.0)\n";
        assert_eq!(
            patched(text),
            "        self.play(FadeIn(t1), run_time=1.5); self.wait(0.8)\n        # self.wait(5.5)\n"
        );
    }

    #[test]
    fn test_scan_reports_literal_spans() {
        let text = "a; self.wait(2.0); b; self.wait(10)";
        let found = scan(text);
        assert_eq!(found.len(), 2);
        assert_eq!(&text[found[0].span.clone()], "2.0");
        assert_eq!(found[0].value, 2.0);
        assert_eq!(&text[found[1].span.clone()], "10");
        assert_eq!(found[1].value, 10.0);
    }

    #[test]
    fn test_rewrite_records_each_change() {
        let (_, rewrites) = rewrite("self.wait(0.5) self.wait(2.0) self.wait(4.0)");
        let literals: Vec<_> = rewrites.iter().map(|r| r.literal.as_str()).collect();
        assert_eq!(literals, ["0.8", "3.0", "5.5"]);

        let added: f64 = rewrites.iter().map(|r| r.rewritten - r.original).sum();
        assert!((added - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_rewrite_is_not_idempotent() {
        let once = patched("self.wait(1.0)");
        let twice = patched(&once);
        assert_eq!(once, "self.wait(1.8)");
        assert_eq!(twice, "self.wait(2.8)");
    }

    #[test]
    fn test_non_finite_literal_is_left_alone() {
        let huge = "9".repeat(400);
        let text = format!("self.wait({huge})");
        let (out, rewrites) = rewrite(&text);
        assert_eq!(out, text);
        assert!(rewrites.is_empty());
    }
}
