//! Version source port - the identifier of the current code revision.

use thiserror::Error;

use crate::domain::value_objects::CommitId;
use crate::error::HippoError;

/// Why a revision could not be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VcsError {
    /// Tool missing, or working directory is not a repository
    #[error("{0}")]
    NoRepository(String),

    /// Repository has no commit reachable from HEAD
    #[error("repository has no commits")]
    NoCommits,
}

impl From<VcsError> for HippoError {
    fn from(err: VcsError) -> Self {
        match err {
            VcsError::NoRepository(message) => HippoError::NoRepository { message },
            VcsError::NoCommits => HippoError::NoCommits,
        }
    }
}

/// Source of deterministic revision identifiers.
///
/// The same repository state must always yield the same identifier.
pub trait VersionSource {
    /// Identifier of the commit currently checked out
    fn current_revision(&self) -> Result<CommitId, VcsError>;
}
