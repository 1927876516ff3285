use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling, writing, or patching scene files.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Topic data that would produce a broken source file.
    #[error("malformed content in topic '{topic}' ({part}): {reason}")]
    Input {
        topic: String,
        part: String,
        reason: InputReason,
    },

    /// Any read or write failure. Aborts the batch.
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ForgeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a piece of topic content was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputReason {
    #[error("{0}")]
    Syntax(#[from] SyntaxIssue),

    #[error("file name {0:?} must be a bare file name")]
    BadFilename(String),

    #[error("class name {0:?} is not an identifier")]
    BadClassName(String),
}

/// A lexical defect found in a source fragment. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxIssue {
    #[error("'{open}' opened on line {line} is never closed")]
    Unclosed { open: char, line: usize },

    #[error("unexpected '{close}' on line {line}")]
    Unexpected { close: char, line: usize },

    #[error("'{close}' on line {line} does not match '{open}' from line {open_line}")]
    Mismatched {
        open: char,
        open_line: usize,
        close: char,
        line: usize,
    },

    #[error("string literal starting on line {line} is not terminated")]
    UnterminatedString { line: usize },
}
