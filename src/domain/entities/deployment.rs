//! DeploymentContext entity - everything known about one deploy call
//!
//! Built up stage by stage inside a single `deploy` invocation and never
//! persisted.

use crate::domain::value_objects::{ClusterConnection, CommitId, ContentHash};

/// The fully resolved inputs and output of one deploy
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentContext {
    /// Environment name as given by the operator
    environment_name: String,
    /// Connection resolved from `kubernetesContexts`
    cluster_connection: ClusterConnection,
    /// Revision the manifest was stamped with
    commit: CommitId,
    /// Timestamp substituted for `${TIMESTAMP}`
    timestamp: String,
    /// Template after substitution
    rendered_manifest: String,
}

impl DeploymentContext {
    pub fn new(
        environment_name: impl Into<String>,
        cluster_connection: ClusterConnection,
        commit: CommitId,
        timestamp: impl Into<String>,
        rendered_manifest: impl Into<String>,
    ) -> Self {
        Self {
            environment_name: environment_name.into(),
            cluster_connection,
            commit,
            timestamp: timestamp.into(),
            rendered_manifest: rendered_manifest.into(),
        }
    }

    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }

    pub fn cluster_connection(&self) -> &ClusterConnection {
        &self.cluster_connection
    }

    pub fn commit(&self) -> &CommitId {
        &self.commit
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn rendered_manifest(&self) -> &str {
        &self.rendered_manifest
    }

    /// Digest of the rendered manifest
    pub fn manifest_digest(&self) -> ContentHash {
        ContentHash::from_content(&self.rendered_manifest)
    }
}
