//! Configuration module for Hippo
//!
//! Configuration sources, highest priority first:
//! 1. CLI flags (`--project-root`, `--json`, `-v`)
//! 2. Environment variables (`HIPPO_KUBECTL`, `HIPPO_GIT`, `HIPPO_LOG`)
//! 3. Project config (`hippo.yaml` in the project root)

mod loader;
mod types;

pub use loader::{
    config_path, load_with_warnings, ConfigWarning, ToolPaths, CONFIG_FILE_NAME, GIT_ENV,
    KUBECTL_ENV,
};
pub use types::{DockerRegistryConfig, ProjectConfiguration, VersionControlConfig};
