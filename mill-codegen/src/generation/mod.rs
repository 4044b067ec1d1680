//! Output management: imports, namespaces and project layout.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`NamespaceMode`] - Base namespace selection
//! - [`ProjectLayout`] - Per-context project directories and packages

mod imports;
mod layout;
mod namespace;

pub use imports::ImportCollector;
pub use layout::{PackageKind, ProjectLayout, ProjectMode};
pub use namespace::{FALLBACK_NAMESPACE, NamespaceMode, resolve_namespace};
