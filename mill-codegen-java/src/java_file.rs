//! JavaFile abstraction for structured Java file generation.
//!
//! A Java source file is a package declaration, import groups and a single
//! top-level type.

use eventmill_codegen::{
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
    generation::ImportCollector,
};

use crate::ast::Import;

/// A structured representation of a Java file.
///
/// # Example
///
/// ```ignore
/// let file = JavaFile::new("com.acme.orders.events")
///     .imports(imports)
///     .add(class)
///     .render();
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    imports: ImportCollector,
    body: Vec<CodeFragment>,
}

impl JavaFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: ImportCollector::new(),
            body: Vec::new(),
        }
    }

    /// Imports, one group per module in insertion order.
    pub fn imports(mut self, imports: ImportCollector) -> Self {
        self.imports = imports;
        self
    }

    /// Add the top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Add already rendered fragments.
    pub fn fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Render with tab indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        builder.push_line(&format!("package {};", self.package));
        builder.push_blank();

        // Each module gets its own group, followed by a blank line
        for (module, symbols) in self.imports.iter().filter(|(_, s)| !s.is_empty()) {
            for symbol in symbols {
                builder.emit(&Import::new(module, symbol.as_str()));
            }
            builder.push_blank();
        }

        for fragment in &self.body {
            builder.apply_fragment(fragment.clone());
        }

        builder.build()
    }
}
