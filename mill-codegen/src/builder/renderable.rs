//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) turns
//! fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `/** ... */` documentation comment, one entry per line.
    DocBlock(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn doc_block(lines: Vec<String>) -> Self {
        Self::DocBlock(lines)
    }

    /// Join non-empty groups with one blank line between them.
    pub fn separated(groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Self {
        let mut out = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !out.is_empty() {
                out.push(Self::Blank);
            }
            out.extend(group);
        }
        Self::Sequence(out)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
