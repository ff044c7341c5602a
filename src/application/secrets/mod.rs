//! Secrets Module
//!
//! Provisions a namespaced key/value secret in an environment's cluster.
//!
//! - `use_case` - `SecretUseCase`, delete-then-create against the cluster gateway

mod use_case;

pub use use_case::{SecretOptions, SecretReport, SecretUseCase};
