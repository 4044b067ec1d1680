//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{FailedFile, GenerateResult, LanguageCodegen, PreviewFile};
