//! Lint for notes pointing at unknown schemas.

use eventmill_core::Diagnostic;
use eventmill_model::{EventModel, NoteKind};

use super::super::Lint;

/// Lint that warns about commands, events and read models whose schema id
/// is not in the schema registry. Such notes are generated without fields.
pub struct MissingSchemaLint;

impl Lint for MissingSchemaLint {
    fn name(&self) -> &'static str {
        "missing-schema"
    }

    fn check(&self, model: &EventModel, diagnostics: &mut Vec<Diagnostic>) {
        for kind in [NoteKind::Command, NoteKind::Event, NoteKind::ReadModel] {
            for note in model.notes(kind) {
                let Some(schema_id) = note.schema_id else {
                    continue;
                };
                if model.schema(schema_id).is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "{} '{}' references unknown schema {}",
                                kind.prefix(),
                                note.name,
                                schema_id
                            ),
                        )
                        .at(format!("{}s.{}", kind.prefix(), note.id)),
                    );
                }
            }
        }
    }
}
