use std::path::PathBuf;

use serde::Serialize;

/// A fully assembled source file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub text: String,
}

/// Result of writing one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: usize,
}
