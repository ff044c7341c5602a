use std::path::Path;

use anyhow::Result;

use hippo::application::SecretOptions;
use hippo::config::ToolPaths;
use hippo::domain::entities::SecretRecord;
use hippo::infrastructure::{JsonEventSink, TracingEventSink};
use hippo::presentation::factory::create_secret_use_case;
use hippo::presentation::output::{emit, render_secret_report};

pub fn cmd_secret_set(
    project_root: &Path,
    environment: &str,
    name: &str,
    pairs: &[String],
    json: bool,
) -> Result<()> {
    // Malformed input is rejected before the cluster is touched.
    let secret = SecretRecord::from_pairs(name, pairs)?;
    let options = SecretOptions::new(project_root, environment, secret);
    let use_case = create_secret_use_case(&ToolPaths::from_env());

    if json {
        let sink = JsonEventSink::stdout("secret");
        let report = use_case.execute_with_events(&options, &sink)?;
        emit(serde_json::json!({
            "event": "complete",
            "command": "secret",
            "name": report.name,
            "environment": report.environment,
            "keys": report.keys,
            "delete_ignored": report.delete_ignored,
        }))?;
        return Ok(());
    }

    let report = use_case.execute_with_events(&options, &TracingEventSink)?;
    print!("{}", render_secret_report(&report));
    Ok(())
}
