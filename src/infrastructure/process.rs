//! External command helpers shared by the git and kubectl adapters.

use std::path::Path;
use std::process::Output;

/// Human-readable failure text for a finished command.
///
/// Prefers the first non-empty stderr, then stdout, then the exit status.
pub fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    match output.status.code() {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Display name of a program path, for messages
pub fn program_name(program: &Path) -> String {
    program.display().to_string()
}
