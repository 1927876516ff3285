pub mod content;
pub mod emit;
pub mod manifest;
pub mod pacing;
pub mod report;
pub mod template;

pub use scene_forge_core::{error, models};
