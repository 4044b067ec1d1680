//! Lint for `ref` nodes pointing at unknown schemas.

use eventmill_core::Diagnostic;
use eventmill_model::EventModel;

use super::super::Lint;

/// Lint that warns about reference nodes whose target is not registered.
///
/// Emission fails for every file that needs such a reference, so this
/// surfaces the problem before anything is written.
pub struct UnresolvedReferenceLint;

impl Lint for UnresolvedReferenceLint {
    fn name(&self) -> &'static str {
        "unresolved-reference"
    }

    fn check(&self, model: &EventModel, diagnostics: &mut Vec<Diagnostic>) {
        for schema in model.schemas.values() {
            for target in schema.data_type.references() {
                if model.schema(target).is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "schema '{}' references unknown schema {}",
                                schema.name, target
                            ),
                        )
                        .at(format!("schemas.{}", schema.id)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eventmill_model::{DataKind, DataType, Schema};
    use indexmap::IndexMap;
    use uuid::Uuid;

    use super::*;

    fn schema(n: u128, data_type: DataType) -> Schema {
        Schema {
            id: Uuid::from_u128(n),
            name: format!("S{n}"),
            namespace: "orders".into(),
            description: None,
            data_type,
        }
    }

    #[test]
    fn test_nested_unknown_reference() {
        let mut entries = IndexMap::new();
        entries.insert(
            "customer".to_string(),
            DataType::new("S1", DataKind::Ref(Uuid::from_u128(42))),
        );
        entries.insert(
            "known".to_string(),
            DataType::new("S1", DataKind::Ref(Uuid::from_u128(2))),
        );
        let mut model = EventModel::default();
        let root = schema(1, DataType::new("S1", DataKind::Map(entries)));
        let target = schema(2, DataType::new("S2", DataKind::Uuid));
        model.schemas.insert(root.id, root);
        model.schemas.insert(target.id, target);

        let mut diagnostics = Vec::new();
        UnresolvedReferenceLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains(&Uuid::from_u128(42).to_string()));
    }
}
