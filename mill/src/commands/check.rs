use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Event-model JSON document
    pub source: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let parsed = eventmill_model::parse_file(&self.source).unwrap_or_exit();
        let report = ops::check(parsed, &self.source)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
