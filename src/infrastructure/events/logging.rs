//! Tracing Event Sink
//!
//! Turns deploy events into structured log records. Used for human
//! (non-JSON) runs; verbosity is controlled by the subscriber filter.

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl DeployEventSink for TracingEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                environment,
                manifest,
            } => {
                tracing::info!(%environment, manifest = %manifest.display(), "deploy started");
            }
            DeployEvent::StageCompleted { stage } => {
                tracing::debug!(%stage, state = stage.reached_state(), "stage completed");
            }
            DeployEvent::ConfigWarning { message } => {
                tracing::warn!("{}", message);
            }
            DeployEvent::UnresolvedPlaceholders { tokens } => {
                tracing::warn!(
                    tokens = %tokens.join(", "),
                    "manifest still contains placeholders; they will be applied verbatim"
                );
            }
            DeployEvent::Rendered { commit, digest } => {
                tracing::info!("Setting deploy.yaml ${{COMMIT}} to: {}", commit);
                tracing::debug!(%digest, "manifest rendered");
            }
            DeployEvent::Failed { stage, message } => {
                tracing::error!(%stage, "{}", message);
            }
            DeployEvent::Completed { applied, digest } => {
                tracing::info!(applied, %digest, "deploy finished");
            }
            DeployEvent::SecretDeleteIgnored { name, message } => {
                tracing::debug!(secret = %name, "ignoring delete failure: {}", message);
            }
            DeployEvent::SecretCreated { name, keys } => {
                tracing::info!(secret = %name, keys = %keys.join(", "), "secret created");
            }
        }
    }
}
