use std::path::PathBuf;

use clap::Args;
use eventmill_codegen::{
    builder::Indent,
    generation::{NamespaceMode, ProjectMode},
};
use eyre::{Result, eyre};

use super::UnwrapOrExit;
use crate::{
    config::{Config, GenerateConfig, NamespaceModeArg, ProjectModeArg},
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Event-model JSON document
    pub source: PathBuf,

    /// Directory the generated projects are written to (defaults to .)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Create one project per bounded context, or write into the target
    #[arg(long, value_enum)]
    pub project_mode: Option<ProjectModeArg>,

    /// How the base namespace is chosen
    #[arg(long, value_enum)]
    pub namespace_mode: Option<NamespaceModeArg>,

    /// Base namespace, implies --namespace-mode explicit
    #[arg(long)]
    pub namespace: Option<String>,

    /// Indentation: tab, 2, 4 or 8
    #[arg(long)]
    pub indent: Option<Indent>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Path to eventmill.toml (defaults to ./eventmill.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?.generate;
        let parsed = eventmill_model::parse_file(&self.source).unwrap_or_exit();

        let target = self.target(&config);
        let opts = GenerateOptions {
            target: &target,
            project_mode: self.project_mode(&config),
            namespace: self.namespace(&config)?,
            indent: self.indent(&config)?,
            dry_run: self.dry_run,
        };

        let report = ops::generate(parsed, opts)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn target(&self, config: &GenerateConfig) -> PathBuf {
        self.target
            .clone()
            .or_else(|| config.target.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn project_mode(&self, config: &GenerateConfig) -> ProjectMode {
        self.project_mode
            .or(config.project_mode)
            .map(ProjectMode::from)
            .unwrap_or_default()
    }

    fn namespace(&self, config: &GenerateConfig) -> Result<NamespaceMode> {
        // A namespace on the command line beats a mode from the config file
        let mode = match (self.namespace_mode, &self.namespace) {
            (Some(mode), _) => Some(mode),
            (None, Some(_)) => Some(NamespaceModeArg::Explicit),
            (None, None) => config.namespace_mode,
        };
        let namespace = self.namespace.clone().or_else(|| config.namespace.clone());
        ops::generate::select_namespace(mode, namespace)
    }

    fn indent(&self, config: &GenerateConfig) -> Result<Indent> {
        match (self.indent, &config.indent) {
            (Some(indent), _) => Ok(indent),
            (None, Some(indent)) => indent.parse().map_err(|e: String| eyre!(e)),
            (None, None) => Ok(Indent::JAVA),
        }
    }
}
