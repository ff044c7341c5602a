//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::{Path, PathBuf};

/// Directory holding deployment files, relative to the project root
pub const MANIFEST_DIR: &str = "deployment_files";

/// Manifest template file name inside [`MANIFEST_DIR`]
pub const MANIFEST_FILE: &str = "deploy.yaml";

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Project root (holds `hippo.yaml` and `deployment_files/`)
    pub project_root: PathBuf,
    /// Environment name, a key of `kubernetesContexts`
    pub environment: String,
    /// Stop after rendering; never call the cluster
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(project_root: impl Into<PathBuf>, environment: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            environment: environment.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// `<project-root>/deployment_files/deploy.yaml`
    pub fn manifest_path(&self) -> PathBuf {
        manifest_path(&self.project_root)
    }
}

/// Manifest template location under a project root
pub fn manifest_path(project_root: &Path) -> PathBuf {
    project_root.join(MANIFEST_DIR).join(MANIFEST_FILE)
}
