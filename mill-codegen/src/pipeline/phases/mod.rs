//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the model and collects diagnostics
//! - [`PartitionPhase`] - splits the model into bounded contexts

mod partition;
mod validate;

pub use partition::PartitionPhase;
pub use validate::{
    DanglingFlowLint, DefaultStreamLint, Lint, MissingSchemaLint,
    UnresolvedReferenceLint, ValidatePhase,
};
