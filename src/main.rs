//! Hippo CLI - deploy orchestration for scaffolded projects
//!
//! Usage: hippo <COMMAND>
//!
//! Commands:
//!   deploy  Render deployment_files/deploy.yaml and apply it
//!   secret  Manage cluster secrets
//!   envs    List configured environments

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hippo::presentation::output::{print_error, stderr_supports_color};
use hippo::presentation::{Cli, Commands, SecretCommands};

use commands::deploy::cmd_deploy;
use commands::envs::cmd_envs;
use commands::project_root::resolve_project_root;
use commands::secret::cmd_secret_set;

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "HIPPO_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = resolve_project_root(cli.project_root)?;

    match cli.command {
        Commands::Deploy {
            environment,
            dry_run,
        } => cmd_deploy(&project_root, &environment, dry_run, cli.json),
        Commands::Secret {
            command:
                SecretCommands::Set {
                    environment,
                    name,
                    pairs,
                },
        } => cmd_secret_set(&project_root, &environment, &name, &pairs, cli.json),
        Commands::Envs => cmd_envs(&project_root, cli.json),
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so stdout stays clean for manifests and NDJSON.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(stderr_supports_color())
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }
}
