//! Plain-text run summaries printed to stdout.

use scene_forge_core::models::{EmitReport, PatchOutcome};

pub const GENERATE_DONE: &str = "Done.";
pub const PATCH_DONE: &str = "\nPatch complete.";

/// One summary line for a written file.
///
/// ```text
/// Wrote integral.py: 23750 bytes
/// ```
pub fn emit_line(report: &EmitReport) -> String {
    format!("Wrote {}: {} bytes", report.filename, report.bytes)
}

/// One summary line for a patch target.
///
/// ```text
/// SKIP (not found): la_14_basis.py
/// algo_02_quicksort.py: +21.3s wait time added (18 wait calls)
/// ```
pub fn patch_line(outcome: &PatchOutcome) -> String {
    match outcome {
        PatchOutcome::Skipped { filename, .. } => format!("SKIP (not found): {}", filename),
        PatchOutcome::Patched(report) => {
            let suffix = if report.written { "" } else { " [dry run]" };
            format!(
                "{}: +{:.1}s wait time added ({} wait calls){}",
                report.filename, report.added_seconds, report.calls, suffix
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use scene_forge_core::models::PatchReport;

    use super::*;

    fn report(written: bool) -> PatchOutcome {
        PatchOutcome::Patched(PatchReport {
            filename: "algo_02_quicksort.py".to_string(),
            path: PathBuf::from("/tmp/algo_02_quicksort.py"),
            calls: 18,
            added_seconds: 21.299999999999997,
            written,
        })
    }

    #[test]
    fn test_emit_line() {
        let line = emit_line(&EmitReport {
            filename: "integral.py".to_string(),
            path: PathBuf::from("integral.py"),
            bytes: 23750,
        });
        assert_eq!(line, "Wrote integral.py: 23750 bytes");
    }

    #[test]
    fn test_patch_line() {
        assert_eq!(
            patch_line(&report(true)),
            "algo_02_quicksort.py: +21.3s wait time added (18 wait calls)"
        );
        assert_eq!(
            patch_line(&report(false)),
            "algo_02_quicksort.py: +21.3s wait time added (18 wait calls) [dry run]"
        );
    }

    #[test]
    fn test_skip_line() {
        let outcome = PatchOutcome::Skipped {
            filename: "la_14_basis.py".to_string(),
            path: PathBuf::from("la_14_basis.py"),
        };
        assert_eq!(patch_line(&outcome), "SKIP (not found): la_14_basis.py");
    }
}
