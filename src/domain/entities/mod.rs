//! Domain Entities
//!
//! - `DeploymentContext` - resolved inputs and rendered output of one deploy
//! - `SecretRecord` - a namespaced key/value secret
//!
//! The persisted `ProjectConfiguration` lives in [`crate::config`].

mod deployment;
mod secret;

pub use deployment::DeploymentContext;
pub use secret::{SecretPairError, SecretRecord};
