//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read the
/// model and record results or diagnostics on the compilation context.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the model
/// - `PartitionPhase` - computes bounded contexts
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
