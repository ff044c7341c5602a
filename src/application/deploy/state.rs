//! Deploy pipeline state
//!
//! Each variant holds exactly what the next stage needs. The driver in
//! `use_case` consumes one state and produces the next until a terminal
//! state is reached or a stage fails.

use crate::config::ProjectConfiguration;
use crate::domain::entities::DeploymentContext;
use crate::domain::value_objects::{ClusterConnection, CommitId, Stage};

#[derive(Debug)]
pub(crate) enum DeployState {
    Start,
    ManifestChecked,
    ConfigLoaded {
        config: ProjectConfiguration,
    },
    EnvironmentResolved {
        config: ProjectConfiguration,
        connection: ClusterConnection,
    },
    RevisionResolved {
        connection: ClusterConnection,
        commit: CommitId,
    },
    TemplateRendered {
        context: DeploymentContext,
    },
    Applied {
        context: DeploymentContext,
    },
}

impl DeployState {
    /// Stage that moves this state forward; `None` once terminal
    pub(crate) fn next_stage(&self, dry_run: bool) -> Option<Stage> {
        match self {
            DeployState::Start => Some(Stage::CheckManifest),
            DeployState::ManifestChecked => Some(Stage::LoadConfig),
            DeployState::ConfigLoaded { .. } => Some(Stage::ResolveEnvironment),
            DeployState::EnvironmentResolved { .. } => Some(Stage::ResolveRevision),
            DeployState::RevisionResolved { .. } => Some(Stage::RenderManifest),
            DeployState::TemplateRendered { .. } if dry_run => None,
            DeployState::TemplateRendered { .. } => Some(Stage::Apply),
            DeployState::Applied { .. } => None,
        }
    }
}
