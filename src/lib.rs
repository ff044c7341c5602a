//! Hippo - deploy orchestration for scaffolded projects
//!
//! Hippo stamps `deployment_files/deploy.yaml` with the current commit and a
//! timestamp, then applies it to the cluster configured for the named
//! environment in `hippo.yaml`. It can also recreate namespaced secrets.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployFailure, DeployOptions, DeployReport, DeployUseCase};
pub use config::ProjectConfiguration;
pub use domain::services::render_template;
pub use error::{ErrorKind, HippoError, HippoResult};
