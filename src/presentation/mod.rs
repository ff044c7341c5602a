//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Report and error rendering
//!
//! ## Usage
//!
//! ```ignore
//! use hippo::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&project_root, &ToolPaths::from_env());
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, SecretCommands};
pub use factory::{create_deploy_use_case, create_secret_use_case};
