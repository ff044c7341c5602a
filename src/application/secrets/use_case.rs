//! Secret Use Case
//!
//! Recreates a secret: the existing secret (if any) is deleted, then a new
//! one is created from the supplied data. The two calls are not atomic; a
//! concurrent writer targeting the same name can interleave between them.

use std::path::PathBuf;

use crate::domain::entities::SecretRecord;
use crate::domain::ports::{
    ClusterGateway, ConfigRepository, DeployEvent, DeployEventSink, NoopEventSink,
};
use crate::domain::services::resolve_environment;
use crate::error::HippoResult;

/// Options for the secret use case
#[derive(Debug, Clone)]
pub struct SecretOptions {
    pub project_root: PathBuf,
    pub environment: String,
    pub secret: SecretRecord,
}

impl SecretOptions {
    pub fn new(
        project_root: impl Into<PathBuf>,
        environment: impl Into<String>,
        secret: SecretRecord,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            environment: environment.into(),
            secret,
        }
    }
}

/// Outcome of a secret provisioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReport {
    pub name: String,
    pub environment: String,
    pub connection: String,
    /// Keys written, sorted
    pub keys: Vec<String>,
    /// Diagnostic of the pre-create delete, when it failed
    pub delete_ignored: Option<String>,
}

/// Secret use case - delete then create one secret
pub struct SecretUseCase<CR, CG>
where
    CR: ConfigRepository,
    CG: ClusterGateway,
{
    config_repo: CR,
    cluster: CG,
}

impl<CR, CG> SecretUseCase<CR, CG>
where
    CR: ConfigRepository,
    CG: ClusterGateway,
{
    pub fn new(config_repo: CR, cluster: CG) -> Self {
        Self {
            config_repo,
            cluster,
        }
    }

    pub fn execute(&self, options: &SecretOptions) -> HippoResult<SecretReport> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the secret use case, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &SecretOptions,
        events: &dyn DeployEventSink,
    ) -> HippoResult<SecretReport> {
        let (config, warnings) = self.config_repo.load_with_warnings(&options.project_root)?;
        for warning in warnings {
            events.on_event(DeployEvent::ConfigWarning {
                message: warning.to_string(),
            });
        }

        let connection = resolve_environment(&config, &options.environment)?;
        let name = options.secret.name();

        // The delete result never decides the outcome; create reports the real failure.
        let delete_ignored = match self.cluster.delete_secret(&connection, name) {
            Ok(()) => None,
            Err(e) => {
                let message = e.to_string();
                tracing::debug!(secret = name, error = %message, "ignoring failed secret delete");
                events.on_event(DeployEvent::SecretDeleteIgnored {
                    name: name.to_string(),
                    message: message.clone(),
                });
                Some(message)
            }
        };

        self.cluster.create_secret(&connection, &options.secret)?;

        let keys: Vec<String> = options.secret.keys().map(str::to_string).collect();
        events.on_event(DeployEvent::SecretCreated {
            name: name.to_string(),
            keys: keys.clone(),
        });

        Ok(SecretReport {
            name: name.to_string(),
            environment: options.environment.clone(),
            connection: connection.as_str().to_string(),
            keys,
            delete_ignored,
        })
    }
}
