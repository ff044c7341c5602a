//! Command entry points
//!
//! Each `cmd_*` function wires infrastructure into a use case and renders
//! the outcome. Errors bubble up as `anyhow::Error` and are printed by `main`.

pub mod deploy;
pub mod envs;
pub mod project_root;
pub mod secret;
