//! YAML-based configuration repository implementation.

use std::path::Path;

use crate::config::{config_path, ConfigWarning, ProjectConfiguration};
use crate::domain::ports::ConfigRepository;
use crate::error::HippoResult;

/// Reads `hippo.yaml` from the project root.
///
/// Delegates to [`ProjectConfiguration::load_with_warnings`], providing a
/// trait-based abstraction for dependency injection.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigRepository;

impl YamlConfigRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRepository for YamlConfigRepository {
    fn load_with_warnings(
        &self,
        project_root: &Path,
    ) -> HippoResult<(ProjectConfiguration, Vec<ConfigWarning>)> {
        ProjectConfiguration::load_with_warnings(&config_path(project_root))
    }
}
