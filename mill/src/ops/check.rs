//! Check operation - model validation and partitioning.

use std::path::Path;

use eventmill_codegen::{partition::BoundedContext, pipeline::Pipeline};
use eventmill_model::{EventModel, NoteKind, ParsedModel};
use eyre::{Context, Result};

use super::Messages;
use crate::reports::{CheckReport, ContextSummary};

/// Execute the check operation.
///
/// Runs the validation and partition pipeline without emitting anything.
pub fn check(parsed: ParsedModel, source: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new().run(parsed).wrap_err("Validation failed")?;
    let messages = Messages::collect(&ctx.diagnostics);

    let contexts = ctx
        .contexts()
        .iter()
        .map(|context| {
            let count = |kind| count_kind(&ctx.model, context, kind);
            ContextSummary {
                name: context.name.clone(),
                project: context.project_name(),
                events: count(NoteKind::Event),
                commands: count(NoteKind::Command),
                read_models: count(NoteKind::ReadModel),
            }
        })
        .collect();

    Ok(CheckReport {
        source: source.to_path_buf(),
        errors: messages.errors,
        warnings: messages.warnings,
        infos: messages.infos,
        contexts,
    })
}

fn count_kind(model: &EventModel, context: &BoundedContext, kind: NoteKind) -> usize {
    context
        .placements
        .iter()
        .filter_map(|id| model.placements.get(id))
        .filter(|p| p.note_kind == kind)
        .count()
}
