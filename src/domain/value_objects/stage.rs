//! Deploy pipeline stages

use std::fmt;

use serde::Serialize;

/// A named step of the deploy pipeline, in execution order.
///
/// Completing a stage moves the pipeline into the state named by
/// [`Stage::reached_state`]; a failing stage ends it in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Manifest template exists on disk
    CheckManifest,
    /// `hippo.yaml` loaded
    LoadConfig,
    /// Environment mapped to a cluster connection
    ResolveEnvironment,
    /// Commit identifier obtained
    ResolveRevision,
    /// Template rendered with COMMIT and TIMESTAMP
    RenderManifest,
    /// Rendered manifest submitted to the cluster
    Apply,
}

impl Stage {
    /// Every stage, in the order the pipeline runs them
    pub const ORDER: [Stage; 6] = [
        Stage::CheckManifest,
        Stage::LoadConfig,
        Stage::ResolveEnvironment,
        Stage::ResolveRevision,
        Stage::RenderManifest,
        Stage::Apply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::CheckManifest => "check_manifest",
            Stage::LoadConfig => "load_config",
            Stage::ResolveEnvironment => "resolve_environment",
            Stage::ResolveRevision => "resolve_revision",
            Stage::RenderManifest => "render_manifest",
            Stage::Apply => "apply",
        }
    }

    /// Name of the pipeline state entered when this stage succeeds
    pub fn reached_state(&self) -> &'static str {
        match self {
            Stage::CheckManifest => "ManifestChecked",
            Stage::LoadConfig => "ConfigLoaded",
            Stage::ResolveEnvironment => "EnvironmentResolved",
            Stage::ResolveRevision => "RevisionResolved",
            Stage::RenderManifest => "TemplateRendered",
            Stage::Apply => "Applied",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
