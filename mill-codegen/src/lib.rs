//! Shared code generation utilities for the eventmill generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific code generators (e.g., `eventmill-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector, ProjectLayout, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention, etc.)
//! - [`partition`] - Bounded-context partitioning of the placement graph
//! - [`pipeline`] - Validation and partitioning phases run before emission

pub mod builder;
pub mod generation;
pub mod language;
pub mod partition;
pub mod pipeline;
