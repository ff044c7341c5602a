//! Deploy Event Port
//!
//! Provides an observable interface for deploy and secret operations.
//! Enables progress logging, JSON event streams, and test recording.

use std::path::PathBuf;

use crate::domain::value_objects::Stage;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        environment: String,
        manifest: PathBuf,
    },

    /// A stage finished successfully
    StageCompleted { stage: Stage },

    /// Non-fatal configuration problem (unknown key)
    ConfigWarning { message: String },

    /// Placeholders left in the manifest after rendering
    UnresolvedPlaceholders { tokens: Vec<String> },

    /// Manifest rendered
    Rendered { commit: String, digest: String },

    /// Pipeline stopped at `stage`
    Failed { stage: Stage, message: String },

    /// Pipeline finished; `applied` is false for dry runs
    Completed { applied: bool, digest: String },

    /// Pre-create delete of a secret failed and was ignored
    SecretDeleteIgnored { name: String, message: String },

    /// Secret (re)created
    SecretCreated { name: String, keys: Vec<String> },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `TracingEventSink`: structured log lines
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
