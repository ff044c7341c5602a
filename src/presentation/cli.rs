//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--project-root`) are inherited by
//! all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hippo - deploy a project to a Kubernetes environment
#[derive(Parser, Debug)]
#[command(name = "hippo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root holding hippo.yaml and deployment_files/
    /// (default: nearest ancestor of the current directory with hippo.yaml)
    #[arg(short = 'C', long, global = true)]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render deployment_files/deploy.yaml and apply it to an environment
    Deploy {
        /// Environment name (a key of kubernetesContexts in hippo.yaml)
        environment: String,

        /// Render only - print the manifest instead of applying it
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage cluster secrets
    Secret {
        #[command(subcommand)]
        command: SecretCommands,
    },

    /// List configured environments
    Envs,
}

#[derive(Subcommand, Debug)]
pub enum SecretCommands {
    /// Replace a secret (delete, then create)
    Set {
        /// Environment name (a key of kubernetesContexts in hippo.yaml)
        environment: String,

        /// Secret name
        name: String,

        /// Secret data as KEY=VALUE pairs
        #[arg(required = true, value_name = "KEY=VALUE")]
        pairs: Vec<String>,
    },
}
