//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod commit;
mod connection;
mod hash;
mod stage;

pub use commit::CommitId;
pub use connection::{ClusterConnection, ConnectionError};
pub use hash::ContentHash;
pub use stage::Stage;
