//! Common test utilities for Hippo CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus fake `git`/`kubectl` tools
//! - Fixtures: Reusable configuration and manifest content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
