//! Output Rendering
//!
//! Human-readable text for reports and errors, plus NDJSON helpers for
//! `--json` runs. Rendering functions return strings; the `print_*`
//! helpers decide where they go.

use std::io::{self, Write};

use is_terminal::IsTerminal;

use crate::application::{DeployFailure, DeployReport, SecretReport};
use crate::config::ProjectConfiguration;
use crate::domain::entities::SecretPairError;
use crate::error::HippoError;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Whether stderr should carry ANSI colors
pub fn stderr_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Summary printed after a successful deploy or dry run
pub fn render_deploy_report(report: &DeployReport) -> String {
    let context = &report.context;
    let mut out = String::new();

    if report.applied {
        out.push_str(&format!(
            "Deployed '{}' to {}\n",
            context.environment_name(),
            context.cluster_connection()
        ));
    } else {
        out.push_str(&format!(
            "Rendered '{}' (dry run, nothing applied)\n",
            context.environment_name()
        ));
    }
    out.push_str(&format!("  commit:    {}\n", context.commit()));
    out.push_str(&format!("  timestamp: {}\n", context.timestamp()));
    out.push_str(&format!("  digest:    {}\n", report.digest()));
    if !report.is_fully_rendered() {
        out.push_str(&format!(
            "  unresolved placeholders: {}\n",
            report.unresolved_placeholders.join(", ")
        ));
    }
    out
}

/// Final NDJSON event of a deploy
pub fn deploy_report_event(report: &DeployReport) -> serde_json::Value {
    let context = &report.context;
    serde_json::json!({
        "event": "report",
        "command": "deploy",
        "environment": context.environment_name(),
        "connection": context.cluster_connection().as_str(),
        "commit": context.commit().as_str(),
        "timestamp": context.timestamp(),
        "digest": report.digest().as_str(),
        "applied": report.applied,
        "unresolved_placeholders": report.unresolved_placeholders,
    })
}

pub fn render_secret_report(report: &SecretReport) -> String {
    format!(
        "Secret '{}' recreated in '{}' ({})\n  keys: {}\n",
        report.name,
        report.environment,
        report.connection,
        report.keys.join(", ")
    )
}

/// Table of environment names and connection strings
pub fn render_environments(config: &ProjectConfiguration) -> String {
    if config.kubernetes_contexts.is_empty() {
        return "No environments configured. Run `hippo setup kubernetes` to add one.\n"
            .to_string();
    }

    let width = config
        .kubernetes_contexts
        .keys()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    config
        .kubernetes_contexts
        .iter()
        .map(|(name, connection)| format!("{:<width$}  {}\n", name, connection, width = width))
        .collect()
}

pub fn environments_event(config: &ProjectConfiguration) -> serde_json::Value {
    serde_json::json!({
        "event": "environments",
        "command": "envs",
        "project": config.project_name,
        "environments": config.kubernetes_contexts,
    })
}

/// The library error behind `err`, if any
fn hippo_cause(err: &anyhow::Error) -> Option<&HippoError> {
    if let Some(failure) = err.downcast_ref::<DeployFailure>() {
        return Some(&failure.cause);
    }
    err.downcast_ref::<HippoError>()
}

fn remediation(err: &anyhow::Error) -> Option<String> {
    if err.downcast_ref::<SecretPairError>().is_some() {
        return Some("Pass secret data as KEY=VALUE, e.g. POSTGRES_USER=acme.".to_string());
    }
    hippo_cause(err).and_then(HippoError::remediation)
}

/// Human error block: message, then an indented `Fix:` hint when one exists
pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let (red, yellow, reset) = if color {
        (RED, YELLOW, RESET)
    } else {
        ("", "", "")
    };

    let mut out = format!("{red}Error:{reset} {err}\n");
    if let Some(hint) = remediation(err) {
        let mut lines = hint.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!("  {yellow}Fix:{reset} {first}\n"));
        }
        for line in lines {
            out.push_str(&format!("       {line}\n"));
        }
    }
    out
}

/// NDJSON `error` event
pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let stage = err
        .downcast_ref::<DeployFailure>()
        .map(|failure| failure.stage.as_str());
    serde_json::json!({
        "event": "error",
        "message": err.to_string(),
        "kind": hippo_cause(err).map(|cause| cause.kind().as_str()),
        "stage": stage,
        "remediation": remediation(err),
    })
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit(error_event(err));
        return;
    }
    eprint!("{}", format_error(err, stderr_supports_color()));
}
