//! Partition phase - computes bounded contexts.

use eventmill_core::Diagnostic;
use eyre::Result;

use crate::{
    partition::ContextPartitioner,
    pipeline::{CompilationContext, Phase},
};

/// Phase that splits the model into one bounded context per stream.
pub struct PartitionPhase;

impl Phase for PartitionPhase {
    fn name(&self) -> &'static str {
        "partition"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let contexts = ContextPartitioner::new(&ctx.model).partition();

        for context in contexts.iter().filter(|c| c.is_empty() && !c.is_default()) {
            ctx.add_diagnostic(
                Diagnostic::info(
                    self.name(),
                    format!("stream '{}' has no placements, nothing to generate", context.name),
                )
                .at(format!("streams.{}", context.name)),
            );
        }

        tracing::info!(
            contexts = contexts.iter().filter(|c| !c.is_empty()).count(),
            "partitioned model"
        );
        ctx.contexts = Some(contexts);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use eventmill_core::Severity;
    use eventmill_model::{EventModel, Stream};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_empty_streams_are_reported() {
        let mut model = EventModel::default();
        model.streams.push(Stream {
            id: Uuid::from_u128(1),
            name: "Shipping".into(),
        });
        let mut ctx = CompilationContext::new(model);

        PartitionPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.contexts().len(), 2);
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].severity, Severity::Info);
        assert!(ctx.diagnostics[0].message.contains("Shipping"));
    }
}
