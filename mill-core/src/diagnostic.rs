//! Diagnostics collected while parsing, validating and generating.
//!
//! Problems that do not abort a run (unknown shapes, version mismatches,
//! files that failed to write) are recorded as [`Diagnostic`] values so the
//! caller can present them as text once the run is over.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// The affected unit (run, project or file) could not be produced.
    Error,
    /// Processing continued with the offending value left unset.
    Warning,
    /// Informational message about the run.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stage name, e.g. `parse`, `validate`, `emit`.
    pub phase: String,
    pub message: String,
    /// Optional location in the model (e.g. `schemas.Order.status`).
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Forward this diagnostic to the `tracing` subscriber and hand it back.
    pub fn logged(self) -> Self {
        let location = self.location.as_deref().unwrap_or("-");
        match self.severity {
            Severity::Error => {
                tracing::error!(phase = %self.phase, location, "{}", self.message)
            }
            Severity::Warning => {
                tracing::warn!(phase = %self.phase, location, "{}", self.message)
            }
            Severity::Info => {
                tracing::info!(phase = %self.phase, location, "{}", self.message)
            }
        }
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.phase, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("emit", "could not write Order.java");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "emit");
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("parse", "unknown shape").at("schemas.Order");
        assert_eq!(diag.location.as_deref(), Some("schemas.Order"));
        assert!(diag.severity.is_warning());
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::warning("parse", "unknown shape 'blob'").at("schemas.Order");
        assert_eq!(
            diag.to_string(),
            "warning[parse]: unknown shape 'blob' (at schemas.Order)"
        );
        assert_eq!(
            Diagnostic::info("partition", "3 contexts").to_string(),
            "info[partition]: 3 contexts"
        );
    }

    #[test]
    fn test_logged_returns_self() {
        let diag = Diagnostic::warning("parse", "x");
        assert_eq!(diag.clone().logged(), diag);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
    }
}
