//! Language-agnostic structure definitions.
//!
//! Declarative specifications for generated classes and enums, rendered to a
//! target language by a [`StructureRenderer`].

use super::{CodeFragment, types::TypeRef};

/// Whether a generated class may be modified after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// Zero-argument and all-fields constructors, getters and setters.
    Mutable,
    /// Final fields, all-fields constructor and getters only.
    Immutable,
}

/// A declarative specification for a class.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    pub name: String,
    /// Documentation lines; an empty entry is a paragraph break.
    pub doc: Vec<String>,
    pub fields: Vec<FieldSpec>,
    pub constants: Vec<ConstSpec>,
    /// Enums declared inside the class.
    pub enums: Vec<EnumSpec>,
    pub mutability: Mutability,
}

impl StructSpec {
    pub fn new(name: impl Into<String>, mutability: Mutability) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            fields: Vec::new(),
            constants: Vec::new(),
            enums: Vec::new(),
            mutability,
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constant(mut self, constant: ConstSpec) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn nested_enum(mut self, spec: EnumSpec) -> Self {
        self.enums.push(spec);
        self
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn is_mutable(&self) -> bool {
        self.mutability == Mutability::Mutable
    }
}

/// A field of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeRef,
    /// Trailing comment (declared properties of the field's type).
    pub comment: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A named string constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstSpec {
    pub name: String,
    pub value: String,
}

impl ConstSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A declarative specification for an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    pub name: String,
    pub doc: Vec<String>,
    pub variants: Vec<String>,
}

impl EnumSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }
}

/// Trait for rendering structure specifications to a target language.
pub trait StructureRenderer {
    /// Render a class declaration.
    fn render_struct(&self, spec: &StructSpec) -> Vec<CodeFragment>;

    /// Render an enum declaration.
    fn render_enum(&self, spec: &EnumSpec) -> Vec<CodeFragment>;

    /// Render a field declaration line.
    fn render_field(&self, spec: &FieldSpec, mutability: Mutability) -> String;
}
