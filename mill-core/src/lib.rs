//! Core utilities and types for the eventmill code generator.
//!
//! This crate provides the fundamental pieces shared by the model parser,
//! the language-agnostic code generation layer and the language backends.

mod diagnostic;
mod file;
mod utils;
mod version;

// Diagnostics
pub use diagnostic::{Diagnostic, Severity};
// File operations
pub use file::{File, GeneratedFile};
// Naming utilities
pub use utils::{capitalize_first, format_name, lower_first, to_field_name, to_type_name};
pub use version::SpecVersion;
