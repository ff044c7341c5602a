//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Check the manifest template exists
//! 2. Load `hippo.yaml`
//! 3. Resolve the environment to a cluster connection
//! 4. Resolve the current commit
//! 5. Render the template with COMMIT and TIMESTAMP
//! 6. Apply the rendered manifest
//!
//! The first failing stage ends the run; nothing after it executes and
//! nothing before it is undone.

use crate::domain::entities::DeploymentContext;
use crate::domain::ports::{
    Clock, ClusterGateway, ConfigRepository, DeployEvent, DeployEventSink, FileSystem,
    NoopEventSink, VersionSource,
};
use crate::domain::services::{
    find_placeholders, resolve_environment, Substitutions, TemplateEngine, COMMIT_PLACEHOLDER,
    TIMESTAMP_PLACEHOLDER,
};
use crate::error::{HippoError, HippoResult};

use super::options::DeployOptions;
use super::result::{DeployFailure, DeployReport};
use super::state::DeployState;

/// Non-fatal findings collected while the pipeline runs
#[derive(Default)]
struct Notes {
    config_warnings: Vec<String>,
    unresolved_placeholders: Vec<String>,
}

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so every collaborator can be replaced in tests.
pub struct DeployUseCase<CR, VS, CG, FS, CK>
where
    CR: ConfigRepository,
    VS: VersionSource,
    CG: ClusterGateway,
    FS: FileSystem,
    CK: Clock,
{
    config_repo: CR,
    version_source: VS,
    cluster: CG,
    templates: TemplateEngine<FS>,
    clock: CK,
}

impl<CR, VS, CG, FS, CK> DeployUseCase<CR, VS, CG, FS, CK>
where
    CR: ConfigRepository,
    VS: VersionSource,
    CG: ClusterGateway,
    FS: FileSystem,
    CK: Clock,
{
    pub fn new(config_repo: CR, version_source: VS, cluster: CG, file_system: FS, clock: CK) -> Self {
        Self {
            config_repo,
            version_source,
            cluster,
            templates: TemplateEngine::new(file_system),
            clock,
        }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> Result<DeployReport, DeployFailure> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the deploy use case, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> Result<DeployReport, DeployFailure> {
        events.on_event(DeployEvent::Started {
            environment: options.environment.clone(),
            manifest: options.manifest_path(),
        });

        let mut notes = Notes::default();
        let mut state = DeployState::Start;

        while let Some(stage) = state.next_stage(options.dry_run) {
            state = match self.advance(state, options, events, &mut notes) {
                Ok(next) => next,
                Err(cause) => {
                    events.on_event(DeployEvent::Failed {
                        stage,
                        message: cause.to_string(),
                    });
                    return Err(DeployFailure { stage, cause });
                }
            };
            events.on_event(DeployEvent::StageCompleted { stage });
        }

        let (context, applied) = match state {
            DeployState::Applied { context } => (context, true),
            DeployState::TemplateRendered { context } => (context, false),
            other => unreachable!("pipeline halted in non-terminal state {:?}", other),
        };

        events.on_event(DeployEvent::Completed {
            applied,
            digest: context.manifest_digest().to_string(),
        });

        Ok(DeployReport {
            context,
            applied,
            unresolved_placeholders: notes.unresolved_placeholders,
            config_warnings: notes.config_warnings,
        })
    }

    /// Run the single stage that follows `state`
    fn advance(
        &self,
        state: DeployState,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
        notes: &mut Notes,
    ) -> HippoResult<DeployState> {
        match state {
            DeployState::Start => {
                let path = options.manifest_path();
                if !self.templates.exists(&path) {
                    return Err(HippoError::ManifestNotFound { path });
                }
                Ok(DeployState::ManifestChecked)
            }

            DeployState::ManifestChecked => {
                let (config, warnings) = self.config_repo.load_with_warnings(&options.project_root)?;
                for warning in warnings {
                    let message = warning.to_string();
                    events.on_event(DeployEvent::ConfigWarning {
                        message: message.clone(),
                    });
                    notes.config_warnings.push(message);
                }
                Ok(DeployState::ConfigLoaded { config })
            }

            DeployState::ConfigLoaded { config } => {
                let connection = resolve_environment(&config, &options.environment)?;
                tracing::debug!(
                    environment = %options.environment,
                    context = connection.context().unwrap_or("-"),
                    namespace = connection.namespace().unwrap_or("-"),
                    "environment resolved"
                );
                Ok(DeployState::EnvironmentResolved { config, connection })
            }

            DeployState::EnvironmentResolved { config, connection } => {
                if !config.version_control.provider.is_empty() {
                    tracing::debug!(
                        provider = %config.version_control.provider,
                        "reading commit from local working copy"
                    );
                }
                let commit = self.version_source.current_revision()?;
                Ok(DeployState::RevisionResolved { connection, commit })
            }

            DeployState::RevisionResolved { connection, commit } => {
                let timestamp = self.clock.timestamp();
                let substitutions = Substitutions::from([
                    (COMMIT_PLACEHOLDER.to_string(), commit.as_str().to_string()),
                    (TIMESTAMP_PLACEHOLDER.to_string(), timestamp.clone()),
                ]);
                let rendered = self
                    .templates
                    .render(&options.manifest_path(), &substitutions)?;

                let unresolved = find_placeholders(&rendered);
                if !unresolved.is_empty() {
                    events.on_event(DeployEvent::UnresolvedPlaceholders {
                        tokens: unresolved.clone(),
                    });
                }
                notes.unresolved_placeholders = unresolved;

                let context = DeploymentContext::new(
                    options.environment.clone(),
                    connection,
                    commit,
                    timestamp,
                    rendered,
                );
                events.on_event(DeployEvent::Rendered {
                    commit: context.commit().to_string(),
                    digest: context.manifest_digest().to_string(),
                });
                Ok(DeployState::TemplateRendered { context })
            }

            DeployState::TemplateRendered { context } => {
                self.cluster
                    .apply(context.cluster_connection(), context.rendered_manifest())?;
                Ok(DeployState::Applied { context })
            }

            DeployState::Applied { context } => Ok(DeployState::Applied { context }),
        }
    }
}
