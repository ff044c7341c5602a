//! Cluster Gateway Port
//!
//! Abstracts "apply a rendered manifest to a cluster context" and
//! "create/delete a namespaced secret". Every call is synchronous and
//! best-effort; implementations never retry.

use thiserror::Error;

use crate::domain::entities::SecretRecord;
use crate::domain::value_objects::ClusterConnection;
use crate::error::HippoError;

/// Error from a cluster operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// The cluster client could not be started
    #[error("failed to run {program}: {message}")]
    Unavailable { program: String, message: String },

    /// The cluster client ran and reported failure; carries its diagnostic
    #[error("{0}")]
    Rejected(String),

    /// A local file needed by the request could not be prepared
    #[error("could not stage manifest: {message}")]
    Staging {
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl From<ClusterError> for HippoError {
    fn from(err: ClusterError) -> Self {
        if let ClusterError::Staging { kind, .. } = &err {
            return HippoError::Io(std::io::Error::new(*kind, err.to_string()));
        }
        HippoError::Apply {
            diagnostic: err.to_string(),
        }
    }
}

/// Operations hippo performs against a cluster
pub trait ClusterGateway {
    /// Submit a manifest to the cluster addressed by `connection`
    fn apply(&self, connection: &ClusterConnection, manifest: &str) -> Result<(), ClusterError>;

    /// Create a secret; fails if one with the same name already exists
    fn create_secret(
        &self,
        connection: &ClusterConnection,
        secret: &SecretRecord,
    ) -> Result<(), ClusterError>;

    /// Delete a secret; succeeds when the secret did not exist
    fn delete_secret(&self, connection: &ClusterConnection, name: &str)
        -> Result<(), ClusterError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn rejected_diagnostic_passes_through() {
        let err: HippoError =
            ClusterError::Rejected("error: no objects passed to apply".into()).into();
        assert_eq!(err.kind(), ErrorKind::ApplyError);
        assert_eq!(
            err.to_string(),
            "cluster operation failed: error: no objects passed to apply"
        );
    }

    #[test]
    fn staging_failure_is_io_error() {
        let err: HippoError = ClusterError::Staging {
            kind: std::io::ErrorKind::PermissionDenied,
            message: "Permission denied (os error 13)".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::IoError);
        assert_eq!(
            err.to_string(),
            "IO error: could not stage manifest: Permission denied (os error 13)"
        );
        assert!(err.remediation().is_none());
    }

    #[test]
    fn unavailable_names_program() {
        let err = ClusterError::Unavailable {
            program: "kubectl".into(),
            message: "No such file or directory".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to run kubectl: No such file or directory"
        );
    }
}
