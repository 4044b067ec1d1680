//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indented code buffer that renderables are emitted into
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`StructSpec`], [`EnumSpec`] - Declarative class and enum definitions
//! - [`TypeRef`] - Language-agnostic type references
//! - [`TypeMapper`] - Trait for language-specific type rendering

mod code_builder;
mod indent;
mod renderable;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use structure::{
    ConstSpec, EnumSpec, FieldSpec, Mutability, StructSpec, StructureRenderer,
};
pub use types::{CollectionKind, PrimitiveType, TypeMapper, TypeRef};
