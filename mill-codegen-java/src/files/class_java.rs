use std::path::{Path, PathBuf};

use eventmill_codegen::{
    builder::{Indent, StructSpec, StructureRenderer},
    generation::ImportCollector,
};
use eventmill_core::GeneratedFile;

use crate::{JavaFile, JavaStructureRenderer};

/// A `.java` file holding one class.
#[derive(Debug, Clone)]
pub struct ClassJava {
    /// Package directory relative to the target directory.
    pub dir: PathBuf,
    pub package: String,
    pub imports: ImportCollector,
    pub spec: StructSpec,
    pub indent: Indent,
}

impl GeneratedFile for ClassJava {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(format!("{}.java", self.spec.name))
    }

    fn render(&self) -> String {
        JavaFile::new(&self.package)
            .imports(self.imports.clone())
            .fragments(JavaStructureRenderer::new().render_struct(&self.spec))
            .render_with_indent(self.indent)
    }
}

#[cfg(test)]
mod tests {
    use eventmill_codegen::builder::{FieldSpec, Mutability, PrimitiveType, TypeRef};

    use super::*;

    #[test]
    fn test_class_java() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "UUID");
        let file = ClassJava {
            dir: PathBuf::from("Orders/src/shop/orders/events"),
            package: "shop.orders.events".into(),
            imports,
            spec: StructSpec::new("OrderShipped", Mutability::Immutable)
                .field(FieldSpec::new("orderId", TypeRef::primitive(PrimitiveType::Uuid))),
            indent: Indent::JAVA,
        };

        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/Orders/src/shop/orders/events/OrderShipped.java")
        );
        let content = file.render();
        assert!(content.starts_with(
            "package shop.orders.events;\n\nimport java.util.UUID;\n\npublic final class OrderShipped {\n"
        ));
    }
}
