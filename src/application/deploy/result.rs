//! Deploy Result
//!
//! Outcome types for deploy operations: a report on success, a
//! stage-tagged failure otherwise.

use thiserror::Error;

use crate::domain::entities::DeploymentContext;
use crate::domain::value_objects::{ContentHash, Stage};
use crate::error::HippoError;

/// Successful deploy (or dry run)
#[derive(Debug, Clone)]
pub struct DeployReport {
    /// Everything resolved along the way, including the rendered manifest
    pub context: DeploymentContext,
    /// False when the run stopped after rendering
    pub applied: bool,
    /// Placeholders still present in the rendered manifest
    pub unresolved_placeholders: Vec<String>,
    /// Unknown-key warnings from `hippo.yaml`
    pub config_warnings: Vec<String>,
}

impl DeployReport {
    pub fn digest(&self) -> ContentHash {
        self.context.manifest_digest()
    }

    pub fn is_fully_rendered(&self) -> bool {
        self.unresolved_placeholders.is_empty()
    }
}

/// The pipeline stopped at `stage` because of `cause`
#[derive(Error, Debug)]
#[error("deploy failed at {stage}: {cause}")]
pub struct DeployFailure {
    pub stage: Stage,
    #[source]
    pub cause: HippoError,
}

impl DeployFailure {
    /// Remediation hint of the underlying cause, if any
    pub fn remediation(&self) -> Option<String> {
        self.cause.remediation()
    }
}
