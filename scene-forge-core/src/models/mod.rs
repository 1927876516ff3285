//! Domain models for scene-forge.
//!
//! # Core Concepts
//!
//! ## Static Content
//!
//! - [`Topic`]: One narrated scene. Owns the six [`Sections`] payloads plus the
//!   names used to render the file header and class skeleton.
//! - [`PaceBucket`]: The fixed five-range rule that decides how much a pacing
//!   literal grows.
//!
//! ## Per-run Artifacts
//!
//! These are produced fresh on every invocation and never persisted:
//!
//! - [`GeneratedFile`]: An assembled source file waiting to be written.
//! - [`WaitDirective`]: A `self.wait(<literal>)` occurrence found by a text scan.
//! - [`PatchOutcome`] / [`EmitReport`]: What happened to each file.

mod emit;
mod pacing;
mod topic;

pub use emit::*;
pub use pacing::*;
pub use topic::*;
