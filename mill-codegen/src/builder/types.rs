//! Language-agnostic type system for code generation.
//!
//! Types are represented semantically and rendered per target language
//! through the [`TypeMapper`] trait.

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A scalar type.
    Primitive(PrimitiveType),
    /// A generated class or enum, by name.
    Named(String),
    /// A single-element container.
    Collection {
        kind: CollectionKind,
        element: Box<TypeRef>,
    },
    /// An associative container.
    Map {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    /// A value that may be absent.
    Optional(Box<TypeRef>),
}

impl TypeRef {
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn collection(kind: CollectionKind, element: TypeRef) -> Self {
        Self::Collection {
            kind,
            element: Box::new(element),
        }
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Type arguments, in declaration order (empty for non-generic types).
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn args(&self) -> Vec<&TypeRef> {
        match self {
            Self::Collection { element, .. } => vec![element],
            Self::Optional(inner) => vec![inner],
            Self::Map { key, value } => vec![key, value],
            _ => Vec::new(),
        }
    }

    /// Nesting depth of generic containers (0 for a scalar or named type).
    pub fn depth(&self) -> usize {
        self.args()
            .into_iter()
            .map(|arg| arg.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Scalar types of the event-model vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Text (also used for symbols, keywords and regex-constrained values).
    String,
    Int,
    Double,
    Bool,
    Uuid,
    /// Untyped value.
    Any,
    /// The absent value.
    Nil,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Uuid => "uuid",
            Self::Any => "any",
            Self::Nil => "nil",
        }
    }
}

/// Single-element container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Synchronized growable array.
    Vector,
    /// Ordered sequence.
    Sequence,
    Set,
}

/// Trait for mapping types to language-specific representations.
pub trait TypeMapper {
    /// Map a primitive type. `boxed` is set when the type is a generic argument.
    fn map_primitive(&self, ty: PrimitiveType, boxed: bool) -> String;

    /// Map a container over an already rendered element.
    fn map_collection(&self, kind: CollectionKind, element: &str) -> String;

    /// Map an associative container over rendered key and value.
    fn map_map(&self, key: &str, value: &str) -> String;

    /// Render an optional value around its already rendered inner type.
    fn map_optional(&self, inner: &str) -> String {
        inner.to_string()
    }

    /// Render a field-level type; primitives keep their unboxed form.
    fn render_type(&self, ty: &TypeRef) -> String {
        self.render_in(ty, false)
    }

    /// Render `ty` as it would appear in the given position.
    fn render_in(&self, ty: &TypeRef, boxed: bool) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p, boxed),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Collection { kind, element } => {
                let element = self.render_in(element, true);
                self.map_collection(*kind, &element)
            }
            TypeRef::Map { key, value } => {
                let key = self.render_in(key, true);
                let value = self.render_in(value, true);
                self.map_map(&key, &value)
            }
            TypeRef::Optional(inner) => {
                let inner = self.render_in(inner, true);
                self.map_optional(&inner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Angle;

    impl TypeMapper for Angle {
        fn map_primitive(&self, ty: PrimitiveType, boxed: bool) -> String {
            if boxed {
                format!("^{}", ty.as_str())
            } else {
                ty.as_str().to_string()
            }
        }

        fn map_collection(&self, kind: CollectionKind, element: &str) -> String {
            format!("{:?}<{}>", kind, element)
        }

        fn map_map(&self, key: &str, value: &str) -> String {
            format!("Map<{}, {}>", key, value)
        }
    }

    #[test]
    fn test_primitive_boxed_only_inside_generics() {
        let ty = TypeRef::collection(CollectionKind::Set, TypeRef::primitive(PrimitiveType::Int));
        assert_eq!(Angle.render_type(&ty), "Set<^int>");
        assert_eq!(
            Angle.render_type(&TypeRef::primitive(PrimitiveType::Int)),
            "int"
        );
    }

    #[test]
    fn test_depth_and_args() {
        let ty = TypeRef::collection(
            CollectionKind::Sequence,
            TypeRef::map(
                TypeRef::primitive(PrimitiveType::Uuid),
                TypeRef::primitive(PrimitiveType::Int),
            ),
        );
        assert_eq!(ty.depth(), 2);
        assert_eq!(ty.args().len(), 1);
        assert_eq!(
            Angle.render_type(&ty),
            "Sequence<Map<^uuid, ^int>>"
        );
    }

    #[test]
    fn test_named() {
        assert_eq!(TypeRef::named("Order").depth(), 0);
        assert_eq!(Angle.render_type(&TypeRef::named("Order")), "Order");
    }

    #[test]
    fn test_optional_renders_boxed_inner() {
        let ty = TypeRef::optional(TypeRef::primitive(PrimitiveType::Int));
        assert_eq!(Angle.render_type(&ty), "^int");
    }
}
