//! Base namespace selection.

use eventmill_model::{DEFAULT_NAMESPACE, EventModel};
use indexmap::IndexMap;

/// Namespace used when nothing better is known.
pub const FALLBACK_NAMESPACE: &str = "main";

/// How the base namespace of generated projects is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamespaceMode {
    /// Use the given namespace verbatim.
    Explicit(String),
    /// Use the namespace shared by most schemas.
    #[default]
    Majority,
    /// Use [`FALLBACK_NAMESPACE`].
    Default,
}

/// Resolve the base namespace (dot separated) for `model`.
pub fn resolve_namespace(model: &EventModel, mode: &NamespaceMode) -> String {
    match mode {
        NamespaceMode::Explicit(namespace) => namespace.trim().to_string(),
        NamespaceMode::Majority => majority_namespace(model),
        NamespaceMode::Default => FALLBACK_NAMESPACE.to_string(),
    }
}

/// Most frequent schema namespace; ties go to the one seen first.
fn majority_namespace(model: &EventModel) -> String {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for schema in model.schemas.values() {
        *counts.entry(schema.namespace.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (namespace, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((namespace, count));
        }
    }

    match best {
        Some((namespace, _)) if namespace != DEFAULT_NAMESPACE => namespace.replace('/', "."),
        _ => FALLBACK_NAMESPACE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use eventmill_model::{DataKind, DataType, Schema};
    use uuid::Uuid;

    use super::*;

    fn model(namespaces: &[&str]) -> EventModel {
        let mut model = EventModel::default();
        for (i, ns) in namespaces.iter().enumerate() {
            let id = Uuid::from_u128(i as u128 + 1);
            model.schemas.insert(
                id,
                Schema {
                    id,
                    name: format!("S{i}"),
                    namespace: ns.to_string(),
                    description: None,
                    data_type: DataType::new(format!("S{i}"), DataKind::String),
                },
            );
        }
        model
    }

    #[test]
    fn test_explicit() {
        let mode = NamespaceMode::Explicit(" com.acme ".into());
        assert_eq!(resolve_namespace(&model(&[]), &mode), "com.acme");
    }

    #[test]
    fn test_default() {
        assert_eq!(
            resolve_namespace(&model(&["orders"]), &NamespaceMode::Default),
            "main"
        );
    }

    #[test]
    fn test_majority() {
        let m = model(&["payments", "orders", "orders"]);
        assert_eq!(resolve_namespace(&m, &NamespaceMode::Majority), "orders");
    }

    #[test]
    fn test_majority_tie_prefers_first_seen() {
        let m = model(&["payments", "orders", "orders", "payments"]);
        assert_eq!(resolve_namespace(&m, &NamespaceMode::Majority), "payments");
    }

    #[test]
    fn test_majority_default_becomes_main() {
        let m = model(&["default", "default", "orders"]);
        assert_eq!(resolve_namespace(&m, &NamespaceMode::Majority), "main");
    }

    #[test]
    fn test_majority_without_schemas() {
        assert_eq!(resolve_namespace(&model(&[]), &NamespaceMode::Majority), "main");
    }

    #[test]
    fn test_majority_converts_separators() {
        let m = model(&["com/acme/orders"]);
        assert_eq!(
            resolve_namespace(&m, &NamespaceMode::Majority),
            "com.acme.orders"
        );
    }
}
