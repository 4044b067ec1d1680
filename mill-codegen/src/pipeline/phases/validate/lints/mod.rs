//! Built-in lints.

mod dangling_flow;
mod default_stream;
mod missing_schema;
mod unresolved_reference;

pub use dangling_flow::DanglingFlowLint;
pub use default_stream::DefaultStreamLint;
pub use missing_schema::MissingSchemaLint;
pub use unresolved_reference::UnresolvedReferenceLint;
