//! Deploy Module
//!
//! Orchestrates a single deploy of `deployment_files/deploy.yaml`.
//!
//! ## Structure
//!
//! - `options` - Input types (`DeployOptions`) and manifest location
//! - `result` - Outcome types (`DeployReport`, `DeployFailure`)
//! - `state` - Pipeline states driven by the use case
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use hippo::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(config_repo, git, kubectl, LocalFs, SystemClock);
//! let report = use_case.execute(&DeployOptions::new(project_root, "dev"))?;
//! ```

mod options;
mod result;
mod state;
mod use_case;

pub use options::{manifest_path, DeployOptions, MANIFEST_DIR, MANIFEST_FILE};
pub use result::{DeployFailure, DeployReport};
pub use use_case::DeployUseCase;
