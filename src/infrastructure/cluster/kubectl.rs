//! kubectl Cluster Gateway
//!
//! Implements the ClusterGateway port by invoking `kubectl` with the
//! environment's connection arguments prepended to every command:
//!
//! - apply:  `kubectl <conn> apply -f <staged manifest>`
//! - create: `kubectl <conn> create secret generic <name> --from-literal=K=V...`
//! - delete: `kubectl <conn> delete secret <name> --ignore-not-found`

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::entities::SecretRecord;
use crate::domain::ports::{ClusterError, ClusterGateway};
use crate::domain::value_objects::ClusterConnection;
use crate::infrastructure::process::{diagnostic, program_name};

const LITERAL_FLAG: &str = "--from-literal=";
const REDACTED: &str = "<redacted>";

/// Cluster gateway backed by the `kubectl` CLI
pub struct KubectlGateway {
    program: PathBuf,
}

impl KubectlGateway {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Full argument list for a command against `connection`
    fn command_args(connection: &ClusterConnection, command: &[String]) -> Vec<String> {
        connection
            .args()
            .iter()
            .chain(command.iter())
            .cloned()
            .collect()
    }

    fn staging_error(err: std::io::Error) -> ClusterError {
        ClusterError::Staging {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Arguments safe to log: `--from-literal` values are masked, keys kept
    fn redacted(args: &[String]) -> Vec<String> {
        args.iter()
            .map(|arg| match arg.strip_prefix(LITERAL_FLAG) {
                Some(pair) => {
                    let key = pair.split_once('=').map_or(pair, |(key, _)| key);
                    format!("{}{}={}", LITERAL_FLAG, key, REDACTED)
                }
                None => arg.clone(),
            })
            .collect()
    }

    fn run(&self, connection: &ClusterConnection, command: Vec<String>) -> Result<String, ClusterError> {
        let args = Self::command_args(connection, &command);
        tracing::debug!(
            program = %self.program.display(),
            args = ?Self::redacted(&args),
            "running kubectl"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ClusterError::Unavailable {
                program: program_name(&self.program),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ClusterError::Rejected(diagnostic(&output)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !stdout.is_empty() {
            tracing::info!(target: "hippo::kubectl", "{}", stdout);
        }
        Ok(stdout)
    }
}

impl ClusterGateway for KubectlGateway {
    fn apply(&self, connection: &ClusterConnection, manifest: &str) -> Result<(), ClusterError> {
        let mut staged = tempfile::Builder::new()
            .prefix("hippo-deploy-")
            .suffix(".yaml")
            .tempfile()
            .map_err(Self::staging_error)?;
        staged
            .write_all(manifest.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(Self::staging_error)?;

        let path = staged.path().display().to_string();
        self.run(
            connection,
            vec!["apply".to_string(), "-f".to_string(), path],
        )?;
        Ok(())
    }

    fn create_secret(
        &self,
        connection: &ClusterConnection,
        secret: &SecretRecord,
    ) -> Result<(), ClusterError> {
        let mut command = vec![
            "create".to_string(),
            "secret".to_string(),
            "generic".to_string(),
            secret.name().to_string(),
        ];
        command.extend(
            secret
                .data()
                .iter()
                .map(|(key, value)| format!("{}{}={}", LITERAL_FLAG, key, value)),
        );
        self.run(connection, command)?;
        Ok(())
    }

    fn delete_secret(&self, connection: &ClusterConnection, name: &str) -> Result<(), ClusterError> {
        self.run(
            connection,
            vec![
                "delete".to_string(),
                "secret".to_string(),
                name.to_string(),
                "--ignore-not-found".to_string(),
            ],
        )?;
        Ok(())
    }
}
