//! Javadoc comments.

use eventmill_codegen::builder::{CodeFragment, Renderable};

/// A `/** ... */` comment. Renders nothing when it has no lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Javadoc {
    lines: Vec<String>,
}

impl Javadoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Description line, if any.
    pub fn description(mut self, description: Option<&str>) -> Self {
        if let Some(description) = description {
            self.lines.push(description.to_string());
        }
        self
    }

    /// One `Property: key - value` line per property, after a separator
    /// line when a description precedes them.
    pub fn properties<'a>(mut self, properties: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut properties = properties.into_iter().peekable();
        if properties.peek().is_some() && !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        for (key, value) in properties {
            self.lines.push(format!("Property: {} - {}", key, value));
        }
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for Javadoc {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl Renderable for Javadoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.lines.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::doc_block(self.lines.clone())]
        }
    }
}

#[cfg(test)]
mod tests {
    use eventmill_codegen::builder::CodeBuilder;
    use indexmap::IndexMap;

    use super::*;

    fn render(doc: &Javadoc) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(doc);
        builder.build()
    }

    #[test]
    fn test_empty_javadoc() {
        assert_eq!(render(&Javadoc::new().description(None)), "");
    }

    #[test]
    fn test_description_and_properties() {
        let mut properties = IndexMap::new();
        properties.insert("aggregate".to_string(), "true".to_string());

        let doc = Javadoc::new()
            .description(Some("An order"))
            .properties(&properties);

        assert_eq!(
            render(&doc),
            "/**\n * An order\n *\n * Property: aggregate - true\n */\n"
        );
    }

    #[test]
    fn test_properties_only() {
        let mut properties = IndexMap::new();
        properties.insert("min".to_string(), "1".to_string());

        let doc = Javadoc::new().description(None).properties(&properties);
        assert_eq!(doc.lines(), ["Property: min - 1"]);
    }
}
