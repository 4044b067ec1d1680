mod emitter;
mod generator;
mod java_file;
mod naming;
mod resolver;
mod structure_renderer;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Class, Constant, Field, Import, JavaEnum, Javadoc, Method, Param};
pub use emitter::{ClassSource, CodeEmitter};
pub use eventmill_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::{Generator, GeneratorOptions};
pub use java_file::JavaFile;
pub use naming::{JAVA_NAMING, accessor, regex_constant};
pub use resolver::{ResolveError, TypeResolver};
pub use structure_renderer::JavaStructureRenderer;
pub use type_mapper::{JAVA_UTIL, JavaTypeMapper};
