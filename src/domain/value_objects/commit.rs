//! Commit identifier value object

use std::fmt;

/// Content-derived revision marker used to tag a deployment.
///
/// Always a commit hash, never a branch name, so re-deploying an unchanged
/// revision renders an identical manifest (timestamp aside).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    /// Wrap a commit identifier, trimming surrounding whitespace
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
