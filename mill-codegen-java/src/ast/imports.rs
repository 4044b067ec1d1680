//! Java import statements.

use eventmill_codegen::builder::{CodeFragment, Renderable};

/// A single-type import, e.g. `import java.util.UUID;`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    package: String,
    name: String,
}

impl Import {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("import {};", self.qualified_name()))]
    }
}

#[cfg(test)]
mod tests {
    use eventmill_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_import() {
        let mut builder = CodeBuilder::java();
        builder.emit(&Import::new("java.util", "UUID"));
        assert_eq!(builder.build(), "import java.util.UUID;\n");
    }
}
