//! Lint for flows between unknown placements.

use eventmill_core::Diagnostic;
use eventmill_model::EventModel;

use super::super::Lint;

/// Lint that warns about flows whose endpoints are not known placements.
/// Such flows never connect anything during partitioning.
pub struct DanglingFlowLint;

impl Lint for DanglingFlowLint {
    fn name(&self) -> &'static str {
        "dangling-flow"
    }

    fn check(&self, model: &EventModel, diagnostics: &mut Vec<Diagnostic>) {
        for (id, flow) in &model.flows {
            for (end, placement) in [("source", flow.from), ("target", flow.to)] {
                if !model.placements.contains_key(&placement) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("flow {} has unknown {} placement {}", id, end, placement),
                        )
                        .at(format!("flows.{}", id)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eventmill_model::{Flow, LaneKind, NoteKind, Placement};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_dangling_target() {
        let mut model = EventModel::default();
        let placement = Placement {
            id: Uuid::from_u128(1),
            index: 0,
            note_kind: NoteKind::Command,
            note_id: Uuid::from_u128(100),
            lane_kind: LaneKind::Timeline,
            lane_id: None,
        };
        model.placements.insert(placement.id, placement);
        model.flows.insert(
            Uuid::from_u128(9),
            Flow {
                from: Uuid::from_u128(1),
                to: Uuid::from_u128(2),
            },
        );

        let mut diagnostics = Vec::new();
        DanglingFlowLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("unknown target placement"));
    }
}
