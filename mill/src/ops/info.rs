//! Info operation - model statistics.

use std::path::Path;

use eventmill_codegen::generation::{NamespaceMode, resolve_namespace};
use eventmill_model::EventModel;
use indexmap::IndexMap;

use crate::reports::{InfoReport, Stats};

/// Execute the info operation.
///
/// Collects statistics from the parsed model without running the pipeline.
pub fn info(model: &EventModel, source: &Path) -> InfoReport {
    InfoReport {
        name: model.name.clone(),
        description: model.description.clone(),
        source: std::fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf()),
        stats: collect_stats(model),
        namespaces: collect_namespaces(model),
        majority_namespace: resolve_namespace(model, &NamespaceMode::Majority),
        streams: model.streams.iter().map(|s| s.name.clone()).collect(),
    }
}

fn collect_stats(model: &EventModel) -> Stats {
    Stats {
        audiences: model.audiences.len(),
        streams: model.streams.len(),
        interfaces: model.interfaces.len(),
        elements: model.interfaces.values().map(|i| i.elements.len()).sum(),
        events: model.events.len(),
        commands: model.commands.len(),
        read_models: model.read_models.len(),
        flows: model.flows.len(),
        placements: model.placements.len(),
        schemas: model.schemas.len(),
    }
}

/// Schema counts per namespace, most used first, ties in document order.
fn collect_namespaces(model: &EventModel) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for schema in model.schemas.values() {
        *counts.entry(schema.namespace.as_str()).or_default() += 1;
    }

    let mut namespaces: Vec<_> = counts
        .into_iter()
        .map(|(namespace, count)| (namespace.to_string(), count))
        .collect();
    namespaces.sort_by(|a, b| b.1.cmp(&a.1));
    namespaces
}
