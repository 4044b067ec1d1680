//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model info.
#[derive(Debug)]
pub struct InfoReport {
    /// Model name.
    pub name: String,
    /// Model description.
    pub description: Option<String>,
    /// Model document path.
    pub source: PathBuf,
    /// Element counts.
    pub stats: Stats,
    /// Schema namespaces with their schema counts, most used first.
    pub namespaces: Vec<(String, usize)>,
    /// Namespace picked by majority vote.
    pub majority_namespace: String,
    /// Stream names in document order.
    pub streams: Vec<String>,
}

/// Model statistics.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub audiences: usize,
    pub streams: usize,
    pub interfaces: usize,
    pub elements: usize,
    pub events: usize,
    pub commands: usize,
    pub read_models: usize,
    pub flows: usize,
    pub placements: usize,
    pub schemas: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.name);
        if let Some(desc) = &self.description {
            out.preformatted(desc);
        }
        out.newline();

        out.key_value("Source", &self.source.display().to_string());
        out.key_value("Majority namespace", &self.majority_namespace);
        out.newline();

        out.section("Model");
        let counts = [
            ("audiences", self.stats.audiences),
            ("streams", self.stats.streams),
            ("interfaces", self.stats.interfaces),
            ("elements", self.stats.elements),
            ("events", self.stats.events),
            ("commands", self.stats.commands),
            ("read models", self.stats.read_models),
            ("flows", self.stats.flows),
            ("placements", self.stats.placements),
            ("schemas", self.stats.schemas),
        ];
        for (key, count) in counts {
            out.key_value_indented(key, &count.to_string());
        }

        if !self.streams.is_empty() {
            out.newline();
            out.section("Streams");
            for stream in &self.streams {
                out.list_item(stream);
            }
        }

        if !self.namespaces.is_empty() {
            out.newline();
            out.section("Schema namespaces");
            for (namespace, count) in &self.namespaces {
                out.key_value_indented(namespace, &count.to_string());
            }
        }
    }
}
