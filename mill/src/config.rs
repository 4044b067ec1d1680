//! Optional `eventmill.toml` with defaults for the `generate` command.
//!
//! ```toml
//! [generate]
//! target = "out"
//! project-mode = "new"
//! namespace-mode = "explicit"
//! namespace = "com.acme"
//! indent = "4"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use eventmill_codegen::generation::ProjectMode;
use eyre::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "eventmill.toml";

/// Project-creation mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectModeArg {
    /// One project directory per bounded context
    New,
    /// Write every context into the target directory
    Existing,
}

impl From<ProjectModeArg> for ProjectMode {
    fn from(arg: ProjectModeArg) -> Self {
        match arg {
            ProjectModeArg::New => ProjectMode::CreateNew,
            ProjectModeArg::Existing => ProjectMode::UseExisting,
        }
    }
}

/// Namespace-selection mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceModeArg {
    /// Use `--namespace` verbatim
    Explicit,
    /// Use the namespace shared by most schemas
    Majority,
    /// Use `main`
    Default,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerateConfig {
    pub target: Option<PathBuf>,
    pub project_mode: Option<ProjectModeArg>,
    pub namespace_mode: Option<NamespaceModeArg>,
    pub namespace: Option<String>,
    pub indent: Option<String>,
}

impl Config {
    /// Load `path`, or `./eventmill.toml` when no path is given and the file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.is_file() {
                    Self::open(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
