//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `config/` - `hippo.yaml` repository
//! - `fs/` - Local file system
//! - `vcs/` - git version source
//! - `cluster/` - kubectl gateway
//! - `events/` - Event sinks (JSON, tracing)

pub mod clock;
pub mod cluster;
pub mod config;
pub mod events;
pub mod fs;
pub(crate) mod process;
pub mod vcs;

// Re-export for convenience
pub use clock::SystemClock;
pub use cluster::KubectlGateway;
pub use config::YamlConfigRepository;
pub use events::{JsonEventSink, TracingEventSink};
pub use fs::LocalFs;
pub use vcs::GitVersionSource;
