//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates the deploy pipeline (manifest, config, environment, commit, render, apply)
//! - `SecretUseCase` - Recreates a secret through delete-then-create

pub mod deploy;
pub mod secrets;

pub use deploy::{DeployFailure, DeployOptions, DeployReport, DeployUseCase};
pub use secrets::{SecretOptions, SecretReport, SecretUseCase};
