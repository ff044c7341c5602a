//! Config repository port - abstracts configuration loading.

use std::path::Path;

use crate::config::{ConfigWarning, ProjectConfiguration};
use crate::error::HippoResult;

/// Repository trait for project configuration.
///
/// Abstracts the underlying storage (YAML file on disk, in-memory fixture)
/// so the deploy pipeline can be exercised without touching the disk.
pub trait ConfigRepository {
    /// Load the configuration for a project, with warnings about unknown keys.
    ///
    /// Fails with `ConfigNotFound` when absent and `InvalidConfig` when
    /// malformed.
    fn load_with_warnings(
        &self,
        project_root: &Path,
    ) -> HippoResult<(ProjectConfiguration, Vec<ConfigWarning>)>;

    /// Load the configuration for a project
    fn load(&self, project_root: &Path) -> HippoResult<ProjectConfiguration> {
        self.load_with_warnings(project_root).map(|(config, _)| config)
    }
}
