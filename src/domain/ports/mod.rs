//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod cluster_gateway;
pub mod config_repository;
pub mod deploy_events;
pub mod file_system;
pub mod version_source;

pub use clock::Clock;
pub use cluster_gateway::{ClusterError, ClusterGateway};
pub use config_repository::ConfigRepository;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use version_source::{VcsError, VersionSource};
