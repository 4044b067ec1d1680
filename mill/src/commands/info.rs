use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Event-model JSON document
    pub source: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let parsed = eventmill_model::parse_file(&self.source).unwrap_or_exit();
        ops::info(&parsed.model, &self.source).render(&mut TerminalOutput::new());
        Ok(())
    }
}
