//! Java enum declarations.

use eventmill_codegen::builder::{CodeFragment, Renderable};

use super::Javadoc;

/// A `public enum` listing bare symbols on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaEnum {
    name: String,
    doc: Javadoc,
    variants: Vec<String>,
}

impl JavaEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Javadoc::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Javadoc) -> Self {
        self.doc = doc;
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }
}

impl Renderable for JavaEnum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        let body = if self.variants.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::line(self.variants.join(", "))]
        };
        fragments.push(CodeFragment::block(
            format!("public enum {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
