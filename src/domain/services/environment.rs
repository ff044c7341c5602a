//! Environment resolution service
//!
//! Maps an environment name to its cluster connection using an already
//! loaded configuration. Pure: no I/O, no cluster calls.

use crate::config::ProjectConfiguration;
use crate::domain::value_objects::ClusterConnection;
use crate::error::{HippoError, HippoResult};

/// Resolve `name` to a cluster connection.
///
/// Fails with `InvalidEnvironment` when the name is not a key of
/// `kubernetesContexts`, maps to an empty string, or cannot be tokenized.
pub fn resolve_environment(
    config: &ProjectConfiguration,
    name: &str,
) -> HippoResult<ClusterConnection> {
    let invalid = |reason: Option<String>| HippoError::InvalidEnvironment {
        name: name.to_string(),
        reason,
        known: config.environment_names(),
    };

    let raw = config
        .kubernetes_contexts
        .get(name)
        .ok_or_else(|| invalid(None))?;

    ClusterConnection::parse(raw).map_err(|e| invalid(Some(e.to_string())))
}
