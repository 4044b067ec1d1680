//! Java class declarations.

use eventmill_codegen::builder::{CodeFragment, Renderable};

use super::Javadoc;

/// A top-level `public class`, with members in groups separated by blank
/// lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: String,
    doc: Javadoc,
    is_final: bool,
    members: Vec<Vec<CodeFragment>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Javadoc::new(),
            is_final: false,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Javadoc) -> Self {
        self.doc = doc;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Add one member group. Empty groups are ignored.
    pub fn group(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.members.push(fragments);
        self
    }

    /// Add each node as its own member group.
    pub fn each<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.members.push(node.to_fragments());
        }
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let modifiers = if self.is_final { "public final class" } else { "public class" };
        let body = match CodeFragment::separated(self.members.iter().cloned()) {
            CodeFragment::Sequence(body) => body,
            other => vec![other],
        };
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::block(
            format!("{} {} {{", modifiers, self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use eventmill_codegen::builder::CodeBuilder;

    use super::*;
    use crate::ast::{Field, Method};

    fn render(class: &Class) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(class);
        builder.build()
    }

    #[test]
    fn test_empty_final_class() {
        assert_eq!(
            render(&Class::new("CancelOrder").final_()),
            "public final class CancelOrder {\n}\n"
        );
    }

    #[test]
    fn test_member_groups_are_separated() {
        let class = Class::new("Customer")
            .group(Vec::new())
            .each([Field::new("name", "String"), Field::new("vip", "boolean")])
            .each([Method::constructor("Customer")]);

        assert_eq!(
            render(&class),
            "public class Customer {\n\
             \tprivate String name;\n\
             \n\
             \tprivate boolean vip;\n\
             \n\
             \tpublic Customer() {\n\
             \t}\n\
             }\n"
        );
    }
}
