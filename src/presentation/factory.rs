//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{DeployUseCase, SecretUseCase};
use crate::config::ToolPaths;
use crate::infrastructure::{
    GitVersionSource, KubectlGateway, LocalFs, SystemClock, YamlConfigRepository,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<YamlConfigRepository, GitVersionSource, KubectlGateway, LocalFs, SystemClock>;

/// Type alias for the concrete SecretUseCase with all dependencies
pub type ConcreteSecretUseCase = SecretUseCase<YamlConfigRepository, KubectlGateway>;

/// Create a deploy use case for the project at `project_root`
///
/// The commit is read from the git working copy containing `project_root`.
pub fn create_deploy_use_case(project_root: &Path, tools: &ToolPaths) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        YamlConfigRepository::new(),
        GitVersionSource::new(&tools.git, project_root),
        KubectlGateway::new(&tools.kubectl),
        LocalFs::new(),
        SystemClock,
    )
}

/// Create a secret use case
pub fn create_secret_use_case(tools: &ToolPaths) -> ConcreteSecretUseCase {
    SecretUseCase::new(YamlConfigRepository::new(), KubectlGateway::new(&tools.kubectl))
}
