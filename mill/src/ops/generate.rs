//! Generate operation - Java sources from an event model.
//!
//! This is the single entry point behind `eventmill generate`: a parsed
//! model, a target directory, a project mode and a namespace mode go in, a
//! [`GenerateReport`] with a success flag and diagnostic text comes out.

use std::path::Path;

use eventmill_codegen::{
    builder::Indent,
    generation::{NamespaceMode, ProjectMode},
    language::LanguageCodegen,
    pipeline::Pipeline,
};
use eventmill_codegen_java::{Generator, GeneratorOptions, JAVA_NAMING};
use eventmill_model::ParsedModel;
use eyre::{Context, Result, bail};

use super::Messages;
use crate::{
    config::NamespaceModeArg,
    reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory generated projects are placed in.
    pub target: &'a Path,
    pub project_mode: ProjectMode,
    pub namespace: NamespaceMode,
    pub indent: Indent,
    /// Render in memory instead of writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Fails only when the options are unusable or the pipeline aborts; file
/// level problems end up in the report.
pub fn generate(parsed: ParsedModel, opts: GenerateOptions) -> Result<GenerateReport> {
    if let NamespaceMode::Explicit(namespace) = &opts.namespace {
        validate_namespace(namespace)?;
    }

    let ctx = Pipeline::new().run(parsed).wrap_err("Pipeline failed")?;
    let mut diagnostics = ctx.diagnostics.clone();

    let generator = Generator::from_context(
        &ctx,
        GeneratorOptions {
            namespace: opts.namespace,
            project_mode: opts.project_mode,
            indent: opts.indent,
        },
    );
    let namespace = generator.namespace();

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        if opts.project_mode == ProjectMode::UseExisting && !opts.target.is_dir() {
            tracing::warn!(
                target_dir = %opts.target.display(),
                "target directory does not exist and will be created"
            );
        }

        let generated = generator
            .generate(opts.target)
            .wrap_err("Failed to generate code")?;
        diagnostics.extend(generated.diagnostics);

        GenerationResult::Written(WrittenResult {
            target: opts.target.to_path_buf(),
            files: generated.written,
            failed: generated.failed,
            skipped: generated.skipped_contexts,
        })
    };

    let messages = Messages::collect(&diagnostics);
    Ok(GenerateReport {
        model_name: ctx.model.name.clone(),
        namespace,
        errors: messages.errors,
        warnings: messages.warnings,
        result,
    })
}

/// Pick the namespace mode from the requested mode and namespace string.
///
/// A namespace without a mode means explicit; no input means majority.
pub fn select_namespace(
    mode: Option<NamespaceModeArg>,
    namespace: Option<String>,
) -> Result<NamespaceMode> {
    match (mode, namespace) {
        (Some(NamespaceModeArg::Explicit) | None, Some(namespace)) => {
            Ok(NamespaceMode::Explicit(namespace))
        }
        (Some(NamespaceModeArg::Explicit), None) => {
            bail!("namespace mode 'explicit' requires a namespace")
        }
        (Some(NamespaceModeArg::Majority) | None, namespace) => {
            if namespace.is_some() {
                tracing::warn!("namespace is ignored with namespace mode 'majority'");
            }
            Ok(NamespaceMode::Majority)
        }
        (Some(NamespaceModeArg::Default), namespace) => {
            if namespace.is_some() {
                tracing::warn!("namespace is ignored with namespace mode 'default'");
            }
            Ok(NamespaceMode::Default)
        }
    }
}

/// Check that `namespace` is a usable dot-separated Java package name.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    let namespace = namespace.trim();
    if namespace.is_empty() {
        bail!("namespace must not be empty");
    }

    for segment in namespace.split('.') {
        let mut chars = segment.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if !valid {
            bail!("invalid namespace '{}': '{}' is not an identifier", namespace, segment);
        }
        if JAVA_NAMING.is_reserved(segment) {
            bail!("invalid namespace '{}': '{}' is a reserved word", namespace, segment);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixture;

    fn options(target: &Path, mode: ProjectMode, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            target,
            project_mode: mode,
            namespace: NamespaceMode::Majority,
            indent: Indent::JAVA,
            dry_run,
        }
    }

    #[test]
    fn test_generate_writes_projects() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(
            fixture::orders(),
            options(dir.path(), ProjectMode::CreateNew, false),
        )
        .unwrap();

        assert!(report.is_success(), "{}", report.diagnostic_text());
        assert_eq!(report.namespace, "orders");
        assert_eq!(report.model_name, "Order Management");

        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.files.len(), 14);
        assert_eq!(written.skipped, ["Shipping"]);
        assert!(
            dir.path()
                .join("Orders/src/orders/orders/events/OrderPlaced.java")
                .is_file()
        );
    }

    #[test]
    fn test_create_new_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let first = generate(
            fixture::orders(),
            options(dir.path(), ProjectMode::CreateNew, false),
        )
        .unwrap();
        assert!(first.is_success());

        let second = generate(
            fixture::orders(),
            options(dir.path(), ProjectMode::CreateNew, false),
        )
        .unwrap();
        assert!(!second.is_success());
        assert!(second.diagnostic_text().contains("error:"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(
            fixture::orders(),
            options(dir.path(), ProjectMode::CreateNew, true),
        )
        .unwrap();

        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected preview result");
        };
        assert_eq!(preview.files.len(), 14);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_explicit_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), ProjectMode::UseExisting, false);
        opts.namespace = NamespaceMode::Explicit("com.acme".into());

        let report = generate(fixture::orders(), opts).unwrap();
        assert_eq!(report.namespace, "com.acme");
        assert!(
            dir.path()
                .join("com/acme/orders/schemas/Order.java")
                .is_file()
        );
    }

    #[test]
    fn test_invalid_explicit_namespace_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), ProjectMode::CreateNew, false);
        opts.namespace = NamespaceMode::Explicit("com.class".into());

        let err = generate(fixture::orders(), opts).unwrap_err();
        assert!(err.to_string().contains("reserved word"));
    }

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("com.acme.orders").is_ok());
        assert!(validate_namespace("_internal.$gen").is_ok());
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("com..acme").is_err());
        assert!(validate_namespace("com.1acme").is_err());
        assert!(validate_namespace("com.my-app").is_err());
        assert!(validate_namespace("org.package").is_err());
    }

    #[test]
    fn test_select_namespace() {
        assert_eq!(
            select_namespace(None, None).unwrap(),
            NamespaceMode::Majority
        );
        assert_eq!(
            select_namespace(None, Some("com.acme".into())).unwrap(),
            NamespaceMode::Explicit("com.acme".into())
        );
        assert_eq!(
            select_namespace(Some(NamespaceModeArg::Default), Some("x".into())).unwrap(),
            NamespaceMode::Default
        );
        assert!(select_namespace(Some(NamespaceModeArg::Explicit), None).is_err());
    }
}
