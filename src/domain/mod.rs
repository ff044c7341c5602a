//! Domain Layer
//!
//! The core of Hippo - deploy logic without direct I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Deployment context and secret records
//! - `value_objects/` - Immutable value types (ClusterConnection, CommitId, Stage)
//! - `services/` - Template rendering and environment resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system, git or the cluster directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
