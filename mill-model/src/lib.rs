// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Event-model document parsing.
//!
//! [`parse_file`] and [`parse_str`] turn a JSON event model into a
//! [`ParsedModel`]: the read-only [`EventModel`] graph plus the warnings
//! raised while building it.

mod data_type;
mod error;
mod model;
pub mod naming;
mod parse;

use std::path::Path;

pub use data_type::{DataKind, DataType, Shape, ShapeMismatch};
pub use error::{Error, Result, SourceContext};
pub use model::*;
pub use parse::{
    DEFAULT_NAMESPACE, ModelParser, ParsedModel, SUPPORTED_SPEC_VERSION, split_qualified_name,
};

/// Parse an event model file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse an event model from a string (uses "model.json" as default filename)
pub fn parse_str(content: &str) -> Result<ParsedModel> {
    parse_str_with_filename(content, "model.json")
}

/// Parse an event model from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<ParsedModel> {
    ModelParser::new().parse(content, filename)
}
