//! Lint trait for model validation.

use eventmill_core::Diagnostic;
use eventmill_model::EventModel;

/// A lint that checks the model for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &EventModel, diagnostics: &mut Vec<Diagnostic>);
}
