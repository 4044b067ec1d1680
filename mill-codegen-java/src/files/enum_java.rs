use std::path::{Path, PathBuf};

use eventmill_codegen::builder::{EnumSpec, Indent, StructureRenderer};
use eventmill_core::GeneratedFile;

use crate::{JavaFile, JavaStructureRenderer};

/// A `.java` file holding one top-level enum.
#[derive(Debug, Clone)]
pub struct EnumJava {
    /// Package directory relative to the target directory.
    pub dir: PathBuf,
    pub package: String,
    pub spec: EnumSpec,
    pub indent: Indent,
}

impl GeneratedFile for EnumJava {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(format!("{}.java", self.spec.name))
    }

    fn render(&self) -> String {
        JavaFile::new(&self.package)
            .fragments(JavaStructureRenderer::new().render_enum(&self.spec))
            .render_with_indent(self.indent)
    }
}
