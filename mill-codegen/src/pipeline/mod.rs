//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that takes a parsed model
//! through the phases that precede emission:
//!
//! - Explicit phase boundaries (validate → partition)
//! - Unified diagnostics collection, seeded with parser warnings
//! - Shared results via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use eventmill_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(eventmill_model::parse_file(path)?)?;
//!
//! for context in ctx.contexts() {
//!     println!("{}: {} placement(s)", context.name, context.placements.len());
//! }
//! ```

mod context;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use phase::Phase;
pub use runner::Pipeline;
