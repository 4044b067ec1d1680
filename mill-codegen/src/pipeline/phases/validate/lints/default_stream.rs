//! Lint for events that fall outside every declared stream.

use eventmill_core::Diagnostic;
use eventmill_model::{EventModel, LaneKind, NoteKind};

use super::super::Lint;
use crate::partition::DEFAULT_STREAM_NAME;

/// Lint that reports event placements without a stream, which end up in the
/// default context, and event placements on unknown streams, which end up in
/// no context at all.
pub struct DefaultStreamLint;

impl Lint for DefaultStreamLint {
    fn name(&self) -> &'static str {
        "default-stream"
    }

    fn check(&self, model: &EventModel, diagnostics: &mut Vec<Diagnostic>) {
        for placement in model.placements_of(NoteKind::Event) {
            let name = model
                .note(NoteKind::Event, placement.note_id)
                .map_or_else(|| placement.note_id.to_string(), |n| n.name.clone());
            let location = format!("placements.{}", placement.id);

            match placement.lane_id {
                None => diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("event '{}' has no stream, generated into {}", name, DEFAULT_STREAM_NAME),
                    )
                    .at(location),
                ),
                Some(lane) if placement.lane_kind != LaneKind::Stream || model.stream(lane).is_none() => {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("event '{}' is placed on unknown stream {}, not generated", name, lane),
                        )
                        .at(location),
                    )
                }
                Some(_) => {}
            }
        }
    }
}
