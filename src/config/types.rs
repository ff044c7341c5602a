//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HippoResult;

use super::loader::{self, ConfigWarning};

/// Version control settings captured by the setup wizard.
///
/// Only `provider` influences deploys (it is logged); commit identifiers are
/// always read from the local working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VersionControlConfig {
    #[serde(default)]
    pub provider: String,

    #[serde(default, alias = "nameSpace")]
    pub namespace: String,

    #[serde(default)]
    pub project: String,

    #[serde(default)]
    pub repository: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Container registry settings captured by `hippo setup docker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DockerRegistryConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,
}

/// Persisted project configuration (`hippo.yaml`).
///
/// Loaded once per invocation and passed by reference through the deploy
/// pipeline. The core never writes this file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    #[serde(default)]
    pub project_name: String,

    #[serde(default)]
    pub language: String,

    /// Environment name -> cluster connection string
    #[serde(default)]
    pub kubernetes_contexts: BTreeMap<String, String>,

    #[serde(default)]
    pub version_control: VersionControlConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_registry: Option<DockerRegistryConfig>,
}

impl ProjectConfiguration {
    /// Load configuration from a file
    pub fn load(path: &Path) -> HippoResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration from a file, collecting unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> HippoResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Names of all configured environments, sorted
    pub fn environment_names(&self) -> Vec<String> {
        self.kubernetes_contexts.keys().cloned().collect()
    }
}
