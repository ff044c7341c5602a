//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: structured log records

mod json;
mod logging;

pub use json::JsonEventSink;
pub use logging::TracingEventSink;
