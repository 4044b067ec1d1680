//! Generate command report data structures.

use std::path::PathBuf;

use eventmill_codegen::language::{FailedFile, PreviewFile};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Model name from the document.
    pub model_name: String,
    /// Base namespace of every generated package.
    pub namespace: String,
    /// Error diagnostics from parsing, validation and emission.
    pub errors: Vec<String>,
    /// Warning diagnostics from parsing, validation and emission.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub target: PathBuf,
    /// Paths relative to `target`.
    pub files: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
    /// Bounded contexts without placements.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl GenerateReport {
    /// No file failed and nothing was reported as an error.
    pub fn is_success(&self) -> bool {
        let failed = match &self.result {
            GenerationResult::Written(written) => !written.failed.is_empty(),
            GenerationResult::Preview(_) => false,
        };
        self.errors.is_empty() && !failed
    }

    /// Human-readable account of everything that went wrong.
    pub fn diagnostic_text(&self) -> String {
        let mut lines: Vec<String> = self.errors.iter().map(|e| format!("error: {}", e)).collect();
        if let GenerationResult::Written(written) = &self.result {
            lines.extend(
                written
                    .failed
                    .iter()
                    .map(|f| format!("failed: {}: {}", f.target, f.error)),
            );
        }
        lines.join("\n")
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for error in &self.errors {
            out.error(error);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        out.preformatted(&self.model_name);
        out.key_value("Namespace", &self.namespace);
        out.newline();

        if !written.files.is_empty() {
            out.section(&format!("Written ({})", written.files.len()));
            for file in &written.files {
                out.added_item(&file.display().to_string());
            }
        }

        if !written.failed.is_empty() {
            out.newline();
            out.section(&format!("Failed ({})", written.failed.len()));
            for failed in &written.failed {
                out.removed_item(&format!("{}: {}", failed.target, failed.error));
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped contexts (no placements)");
            for name in &written.skipped {
                out.list_item(name);
            }
        }

        out.newline();
        out.key_value("Generated", &written.target.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.key_value("Namespace", &self.namespace);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
