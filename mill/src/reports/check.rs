//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model document.
    pub source: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Bounded contexts in partition order.
    pub contexts: Vec<ContextSummary>,
}

/// Placement counts of one bounded context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSummary {
    pub name: String,
    pub project: String,
    pub events: usize,
    pub commands: usize,
    pub read_models: usize,
}

impl ContextSummary {
    pub fn is_empty(&self) -> bool {
        self.events + self.commands + self.read_models == 0
    }
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.source.display()));
        out.newline();

        out.section(&format!("Bounded contexts ({})", self.contexts.len()));
        for (i, context) in self.contexts.iter().enumerate() {
            let text = if context.is_empty() {
                format!("{} (empty, skipped)", context.name)
            } else {
                format!(
                    "{} -> {}: {} events, {} commands, {} read models",
                    context.name,
                    context.project,
                    context.events,
                    context.commands,
                    context.read_models
                )
            };
            out.numbered_item(i + 1, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(errors: Vec<String>) -> CheckReport {
        CheckReport {
            source: PathBuf::from("model.json"),
            errors,
            warnings: Vec::new(),
            infos: Vec::new(),
            contexts: vec![
                ContextSummary {
                    name: "Orders".into(),
                    project: "Orders".into(),
                    events: 1,
                    commands: 2,
                    read_models: 1,
                },
                ContextSummary {
                    name: "Shipping".into(),
                    project: "Shipping".into(),
                    events: 0,
                    commands: 0,
                    read_models: 0,
                },
            ],
        }
    }

    #[test]
    fn test_render_contexts() {
        let mut out = BufferOutput::default();
        report(Vec::new()).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "✓ model.json is valid",
                "",
                "Bounded contexts (2):",
                "  1. Orders -> Orders: 1 events, 2 commands, 1 read models",
                "  2. Shipping (empty, skipped)",
            ]
        );
    }

    #[test]
    fn test_errors_hide_summary() {
        let report = report(vec!["broken".into()]);
        assert!(!report.is_valid());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["error: broken", ""]);
    }
}
