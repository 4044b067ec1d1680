//! Generated Java source files.

mod class_java;
mod enum_java;

use std::path::{Path, PathBuf};

pub use class_java::ClassJava;
pub use enum_java::EnumJava;
use eventmill_core::GeneratedFile;

/// Any generated `.java` file.
#[derive(Debug, Clone)]
pub enum JavaSource {
    Class(ClassJava),
    Enum(EnumJava),
}

impl JavaSource {
    /// Whether both files declare the same members, ignoring documentation.
    pub fn same_shape(&self, other: &JavaSource) -> bool {
        match (self, other) {
            (JavaSource::Class(a), JavaSource::Class(b)) => {
                let (a, b) = (&a.spec, &b.spec);
                a.name == b.name
                    && a.fields == b.fields
                    && a.constants == b.constants
                    && a.mutability == b.mutability
                    && a.enums.len() == b.enums.len()
                    && a.enums
                        .iter()
                        .zip(&b.enums)
                        .all(|(x, y)| x.name == y.name && x.variants == y.variants)
            }
            (JavaSource::Enum(a), JavaSource::Enum(b)) => {
                a.spec.name == b.spec.name && a.spec.variants == b.spec.variants
            }
            _ => false,
        }
    }
}

impl GeneratedFile for JavaSource {
    fn path(&self, base: &Path) -> PathBuf {
        match self {
            JavaSource::Class(file) => file.path(base),
            JavaSource::Enum(file) => file.path(base),
        }
    }

    fn render(&self) -> String {
        match self {
            JavaSource::Class(file) => file.render(),
            JavaSource::Enum(file) => file.render(),
        }
    }
}

impl From<ClassJava> for JavaSource {
    fn from(file: ClassJava) -> Self {
        JavaSource::Class(file)
    }
}

impl From<EnumJava> for JavaSource {
    fn from(file: EnumJava) -> Self {
        JavaSource::Enum(file)
    }
}
