//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::Started {
                environment,
                manifest,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "environment": environment,
                "manifest": manifest.display().to_string(),
            }),

            DeployEvent::StageCompleted { stage } => serde_json::json!({
                "event": "stage_completed",
                "command": command,
                "stage": stage,
                "state": stage.reached_state(),
            }),

            DeployEvent::ConfigWarning { message } => serde_json::json!({
                "event": "warning",
                "command": command,
                "message": message,
            }),

            DeployEvent::UnresolvedPlaceholders { tokens } => serde_json::json!({
                "event": "unresolved_placeholders",
                "command": command,
                "tokens": tokens,
            }),

            DeployEvent::Rendered { commit, digest } => serde_json::json!({
                "event": "rendered",
                "command": command,
                "commit": commit,
                "digest": digest,
            }),

            DeployEvent::Failed { stage, message } => serde_json::json!({
                "event": "failed",
                "command": command,
                "stage": stage,
                "message": message,
            }),

            DeployEvent::Completed { applied, digest } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": if applied { "applied" } else { "rendered" },
                "digest": digest,
            }),

            DeployEvent::SecretDeleteIgnored { name, message } => serde_json::json!({
                "event": "secret_delete_ignored",
                "command": command,
                "name": name,
                "message": message,
            }),

            DeployEvent::SecretCreated { name, keys } => serde_json::json!({
                "event": "secret_created",
                "command": command,
                "name": name,
                "keys": keys,
            }),
        };

        self.write_event(json);
    }
}
