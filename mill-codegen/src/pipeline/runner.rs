//! Pipeline orchestrator.

use eventmill_model::ParsedModel;
use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{PartitionPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the validate phase, then the partition phase.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: vec![Box::new(ValidatePhase::new()), Box::new(PartitionPhase)],
        }
    }

    /// Run the pipeline on a parsed model.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, parsed: ParsedModel) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::from_parsed(parsed);

        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use eventmill_core::Diagnostic;
    use eventmill_model::{EventModel, Flow, Stream};
    use uuid::Uuid;

    use super::*;

    fn parsed() -> ParsedModel {
        let mut model = EventModel::default();
        model.streams.push(Stream {
            id: Uuid::from_u128(1),
            name: "Orders".into(),
        });
        ParsedModel {
            model,
            diagnostics: vec![],
        }
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new().run(parsed()).expect("pipeline should succeed");

        let names: Vec<_> = ctx.contexts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Orders", "DefaultStream"]);
    }

    #[test]
    fn test_phase_order() {
        let names: Vec<_> = Pipeline::new().phases.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["validate", "partition"]);
    }

    #[test]
    fn test_parser_warnings_are_kept() {
        let mut parsed = parsed();
        parsed.diagnostics.push(Diagnostic::warning("parse", "unknown shape"));
        parsed.model.flows.insert(
            Uuid::from_u128(9),
            Flow {
                from: Uuid::from_u128(1),
                to: Uuid::from_u128(2),
            },
        );

        let ctx = Pipeline::new().run(parsed).expect("warnings should not fail the pipeline");

        assert_eq!(ctx.diagnostics[0].phase, "parse");
        assert!(ctx.diagnostics.len() > 1);
    }
}
