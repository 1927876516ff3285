//! Data model and error taxonomy shared by the scene generator and the
//! pacing patcher.

pub mod error;
pub mod models;

pub use error::{ForgeError, InputReason, SyntaxIssue};
