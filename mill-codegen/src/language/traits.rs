//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eventmill_core::Diagnostic;
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating sources in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified target directory.
    ///
    /// Per-file failures are recorded in the result rather than returned.
    fn generate(&self, target: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the target directory
    pub written: Vec<PathBuf>,
    /// Files that could not be rendered or written
    pub failed: Vec<FailedFile>,
    /// Bounded contexts without any placement
    pub skipped_contexts: Vec<String>,
    /// Everything reported while generating
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateResult {
    /// No file failed and no context was abandoned.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

/// A file whose emission was abandoned.
#[derive(Debug, Clone)]
pub struct FailedFile {
    /// Relative path the file would have had, or the declaration name
    pub target: String,
    /// Human-readable reason
    pub error: String,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the target directory
    pub path: String,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_success() {
        let mut result = GenerateResult::default();
        result.diagnostics.push(Diagnostic::warning("emit", "field dropped"));
        assert!(result.is_success());
        assert_eq!(result.warning_count(), 1);

        result.failed.push(FailedFile {
            target: "Orders/src/main/orders/events/OrderPlaced.java".into(),
            error: "permission denied".into(),
        });
        assert!(!result.is_success());
    }

    #[test]
    fn test_result_context_error() {
        let mut result = GenerateResult::default();
        result
            .diagnostics
            .push(Diagnostic::error("layout", "project directory exists"));
        assert!(!result.is_success());
    }
}
