//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod info;
mod output;

pub use check::{CheckReport, ContextSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use info::{InfoReport, Stats};
pub use output::{Report, TerminalOutput};
