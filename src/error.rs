//! Error types for Hippo
//!
//! Uses `thiserror` for library errors. Every variant belongs to one
//! [`ErrorKind`] so callers can branch on the failure class without matching
//! on message text.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Hippo operations
pub type HippoResult<T> = Result<T, HippoError>;

/// Coarse failure classes surfaced to operators and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Manifest or configuration file missing (or configuration malformed)
    NotFound,
    /// Environment name unknown, empty, or unusable
    InvalidEnvironment,
    /// Version control could not be initialized
    NoRepository,
    /// Repository has no commits
    NoCommits,
    /// Cluster rejected or could not process a request
    ApplyError,
    /// Reading a file failed for a reason other than absence
    ReadError,
    /// Any other file-system failure
    IoError,
}

impl ErrorKind {
    /// Stable identifier used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidEnvironment => "invalid_environment",
            Self::NoRepository => "no_repository",
            Self::NoCommits => "no_commits",
            Self::ApplyError => "apply_error",
            Self::ReadError => "read_error",
            Self::IoError => "io_error",
        }
    }
}

/// Main error type for Hippo operations
#[derive(Error, Debug)]
pub enum HippoError {
    /// Deployment manifest template is missing
    #[error("deployment files do not exist: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Project configuration file is missing
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Project configuration file could not be parsed
    #[error("invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Environment is not configured or maps to an unusable connection
    #[error("not a valid kubernetes context: '{name}'{}", reason_suffix(.reason))]
    InvalidEnvironment {
        name: String,
        reason: Option<String>,
        known: Vec<String>,
    },

    /// Version control is unavailable or the directory is not a repository
    #[error("unable to find a git repository: {message}")]
    NoRepository { message: String },

    /// Repository exists but has no commits
    #[error("unable to find latest commit")]
    NoCommits,

    /// The cluster rejected or failed to process a request
    #[error("cluster operation failed: {diagnostic}")]
    Apply { diagnostic: String },

    /// Reading a file failed
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Local file-system failure outside of reading inputs (e.g. staging a manifest)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(" ({})", reason),
        None => String::new(),
    }
}

impl HippoError {
    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestNotFound { .. } | Self::ConfigNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidConfig { .. } => ErrorKind::NotFound,
            Self::InvalidEnvironment { .. } => ErrorKind::InvalidEnvironment,
            Self::NoRepository { .. } => ErrorKind::NoRepository,
            Self::NoCommits => ErrorKind::NoCommits,
            Self::Apply { .. } => ErrorKind::ApplyError,
            Self::Read { .. } => ErrorKind::ReadError,
            Self::Io(_) => ErrorKind::IoError,
        }
    }

    /// Actionable next step for failures caused by a missing precondition.
    ///
    /// External failures (cluster diagnostics, raw I/O) carry no hint; their
    /// message is passed through as-is.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::ManifestNotFound { .. } => {
                Some("Run `hippo setup kubernetes` to create the deployment files.".to_string())
            }
            Self::ConfigNotFound { .. } => {
                Some("Run `hippo setup wizard` to create hippo.yaml.".to_string())
            }
            Self::InvalidConfig { .. } => Some("Fix the YAML in hippo.yaml and try again.".to_string()),
            Self::InvalidEnvironment { known, .. } => {
                let mut hint = "Ensure the context name exists under `kubernetesContexts` in hippo.yaml. Run `hippo setup kubernetes` to configure.".to_string();
                if !known.is_empty() {
                    hint.push_str(&format!("\nConfigured environments: {}", known.join(", ")));
                }
                Some(hint)
            }
            Self::NoRepository { .. } => {
                Some("Run `git init` and create a commit.".to_string())
            }
            Self::NoCommits => {
                Some("Ensure that this branch contains at least one commit.".to_string())
            }
            Self::Apply { .. } | Self::Read { .. } | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_manifest_not_found() {
        let err = HippoError::ManifestNotFound {
            path: PathBuf::from("deployment_files/deploy.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "deployment files do not exist: deployment_files/deploy.yaml"
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.remediation().unwrap().contains("hippo setup kubernetes"));
    }

    #[test]
    fn test_error_display_invalid_environment_with_reason() {
        let err = HippoError::InvalidEnvironment {
            name: "prod".to_string(),
            reason: Some("connection string is empty".to_string()),
            known: vec!["dev".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "not a valid kubernetes context: 'prod' (connection string is empty)"
        );
        assert!(err.remediation().unwrap().contains("Configured environments: dev"));
    }

    #[test]
    fn malformed_config_is_classified_as_not_found() {
        let err = HippoError::InvalidConfig {
            path: PathBuf::from("hippo.yaml"),
            message: "bad indentation".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn apply_errors_pass_diagnostic_through_without_hint() {
        let err = HippoError::Apply {
            diagnostic: "error: unable to recognize".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ApplyError);
        assert!(err.to_string().contains("error: unable to recognize"));
        assert!(err.remediation().is_none());
    }
}
