//! On-disk layout of generated projects.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};

use crate::partition::BoundedContext;

/// Whether each context gets its own project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectMode {
    /// `<target>/<ProjectName>/src`; fails if that directory already exists.
    #[default]
    CreateNew,
    /// Write straight into `<target>`.
    UseExisting,
}

/// Sub-package holding one kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Commands,
    Events,
    ReadModels,
    Schemas,
}

impl PackageKind {
    pub const ALL: [PackageKind; 4] = [
        PackageKind::Commands,
        PackageKind::Events,
        PackageKind::ReadModels,
        PackageKind::Schemas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKind::Commands => "commands",
            PackageKind::Events => "events",
            PackageKind::ReadModels => "readModels",
            PackageKind::Schemas => "schemas",
        }
    }
}

/// Where one bounded context's project lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project name, e.g. `Orders`.
    pub name: String,
    /// Project package, e.g. `com.acme.orders`.
    pub namespace: String,
    /// Source root relative to the target directory.
    pub source_root: PathBuf,
    pub mode: ProjectMode,
}

impl ProjectLayout {
    pub fn new(context: &BoundedContext, base_namespace: &str, mode: ProjectMode) -> Self {
        let name = context.project_name();
        let namespace = format!("{}.{}", base_namespace, eventmill_core::lower_first(&name));
        let source_root = match mode {
            ProjectMode::CreateNew => Path::new(&name).join("src"),
            ProjectMode::UseExisting => PathBuf::new(),
        };
        Self {
            name,
            namespace,
            source_root,
            mode,
        }
    }

    /// Fully qualified package of `kind`, e.g. `com.acme.orders.events`.
    pub fn package(&self, kind: PackageKind) -> String {
        format!("{}.{}", self.namespace, kind.as_str())
    }

    /// Directory of `kind` relative to the target directory.
    pub fn package_dir(&self, kind: PackageKind) -> PathBuf {
        let mut dir = self.source_root.clone();
        dir.extend(self.namespace.split('.'));
        dir.push(kind.as_str());
        dir
    }

    /// Create the source root and every package directory under `target`.
    pub fn prepare(&self, target: &Path) -> Result<()> {
        let root = target.join(&self.source_root);
        if self.mode == ProjectMode::CreateNew && root.exists() {
            bail!("project directory {} already exists", root.display());
        }
        for kind in PackageKind::ALL {
            let dir = target.join(self.package_dir(kind));
            std::fs::create_dir_all(&dir)
                .wrap_err_with(|| format!("failed to create directory {}", dir.display()))?;
        }
        tracing::info!(project = %self.name, root = %root.display(), "prepared project layout");
        Ok(())
    }
}
