mod check;
mod completions;
mod generate;
mod info;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;

/// Extension trait for exiting on model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for eventmill_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "eventmill")]
#[command(version)]
#[command(about = "Generate Java sources from event-model documents")]
pub(crate) struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java projects from an event model
    Generate(GenerateCommand),

    /// Validate an event model without generating code
    Check(CheckCommand),

    /// Show model statistics
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "eventmill",
            "generate",
            "model.json",
            "--target",
            "out",
            "--project-mode",
            "existing",
            "--namespace-mode",
            "explicit",
            "--namespace",
            "com.acme",
            "--dry-run",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.source.to_str(), Some("model.json"));
        assert!(cmd.dry_run);
        assert_eq!(cmd.namespace.as_deref(), Some("com.acme"));
    }

    #[test]
    fn test_rejects_unknown_project_mode() {
        assert!(
            Cli::try_parse_from(["eventmill", "generate", "m.json", "--project-mode", "fresh"])
                .is_err()
        );
    }
}
