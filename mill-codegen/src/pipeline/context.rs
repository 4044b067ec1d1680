//! Compilation context passed through pipeline phases.

use eventmill_core::{Diagnostic, Severity};
use eventmill_model::{EventModel, ParsedModel};

use crate::partition::BoundedContext;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed model. Read-only from here on.
    pub model: EventModel,
    /// Bounded contexts (populated by PartitionPhase).
    pub contexts: Option<Vec<BoundedContext>>,
    /// Diagnostics collected so far, starting with the parser's.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a model.
    pub fn new(model: EventModel) -> Self {
        Self {
            model,
            contexts: None,
            diagnostics: Vec::new(),
        }
    }

    /// Create a context that keeps the parser's diagnostics.
    pub fn from_parsed(parsed: ParsedModel) -> Self {
        Self {
            model: parsed.model,
            contexts: None,
            diagnostics: parsed.diagnostics,
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a diagnostic and log it.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic.logged());
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Bounded contexts, or nothing if partitioning has not run.
    pub fn contexts(&self) -> &[BoundedContext] {
        self.contexts.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(EventModel::default());

        assert!(ctx.contexts.is_none());
        assert!(ctx.contexts().is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(EventModel::default());

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_from_parsed_keeps_diagnostics() {
        let parsed = ParsedModel {
            model: EventModel::default(),
            diagnostics: vec![Diagnostic::warning("parse", "schema left unset")],
        };

        let ctx = CompilationContext::from_parsed(parsed);
        assert_eq!(ctx.warning_count(), 1);
        assert!(!ctx.has_errors());
    }
}
