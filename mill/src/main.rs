mod commands;
mod config;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "eventmill=debug,eventmill_model=debug,eventmill_codegen=debug,eventmill_codegen_java=debug"
    } else {
        "eventmill=info,eventmill_model=info,eventmill_codegen=info,eventmill_codegen_java=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
