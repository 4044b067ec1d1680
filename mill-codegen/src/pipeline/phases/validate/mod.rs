//! Validate phase - runs lints on the model.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DanglingFlowLint, DefaultStreamLint, MissingSchemaLint, UnresolvedReferenceLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the model with the built-in lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingSchemaLint),
                Box::new(UnresolvedReferenceLint),
                Box::new(DanglingFlowLint),
                Box::new(DefaultStreamLint),
            ],
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut found = Vec::new();
        for lint in &self.lints {
            lint.check(&ctx.model, &mut found);
        }
        for diagnostic in found {
            ctx.add_diagnostic(diagnostic);
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use eventmill_core::Diagnostic;
    use eventmill_model::{EventModel, Flow};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn check(&self, _model: &EventModel, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(EventModel::default());

        let phase = ValidatePhase {
            lints: vec![Box::new(AlwaysErrorLint)],
        };
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut model = EventModel::default();
        model.flows.insert(
            Uuid::from_u128(9),
            Flow {
                from: Uuid::from_u128(1),
                to: Uuid::from_u128(2),
            },
        );
        let mut ctx = CompilationContext::new(model);

        let result = ValidatePhase::new().run(&mut ctx);

        // Warnings don't cause failure
        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        let names: Vec<_> = ValidatePhase::new().lints.iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            ["missing-schema", "unresolved-reference", "dangling-flow", "default-stream"]
        );
    }
}
