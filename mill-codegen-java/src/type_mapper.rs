//! Java type mapper implementation.

use std::collections::BTreeSet;

use eventmill_codegen::builder::{CollectionKind, PrimitiveType, TypeMapper, TypeRef};

/// Package every library type used by generated code lives in.
pub const JAVA_UTIL: &str = "java.util";

/// Java type mapper implementation.
///
/// Scalars render unboxed (`int`) at field level and boxed (`Integer`) as
/// generic arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl JavaTypeMapper {
    /// `java.util` types a rendered type needs, sorted.
    pub fn library_imports(&self, ty: &TypeRef) -> BTreeSet<&'static str> {
        let mut imports = BTreeSet::new();
        collect_imports(ty, &mut imports);
        imports
    }
}

fn collect_imports(ty: &TypeRef, imports: &mut BTreeSet<&'static str>) {
    match ty {
        TypeRef::Primitive(PrimitiveType::Uuid) => {
            imports.insert("UUID");
        }
        TypeRef::Collection { kind, .. } => {
            imports.insert(collection_name(*kind));
        }
        TypeRef::Map { .. } => {
            imports.insert("Map");
        }
        TypeRef::Primitive(_) | TypeRef::Named(_) | TypeRef::Optional(_) => {}
    }
    for arg in ty.args() {
        collect_imports(arg, imports);
    }
}

fn collection_name(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Vector => "Vector",
        CollectionKind::Sequence => "List",
        CollectionKind::Set => "Set",
    }
}

impl TypeMapper for JavaTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType, boxed: bool) -> String {
        let name = match (ty, boxed) {
            (PrimitiveType::String, _) => "String",
            (PrimitiveType::Int, false) => "int",
            (PrimitiveType::Int, true) => "Integer",
            (PrimitiveType::Double, false) => "double",
            (PrimitiveType::Double, true) => "Double",
            (PrimitiveType::Bool, false) => "boolean",
            (PrimitiveType::Bool, true) => "Boolean",
            (PrimitiveType::Uuid, _) => "UUID",
            (PrimitiveType::Any, _) => "Object",
            (PrimitiveType::Nil, _) => "Void",
        };
        name.to_string()
    }

    fn map_collection(&self, kind: CollectionKind, element: &str) -> String {
        format!("{}<{}>", collection_name(kind), element)
    }

    fn map_map(&self, key: &str, value: &str) -> String {
        format!("Map<{}, {}>", key, value)
    }
}
