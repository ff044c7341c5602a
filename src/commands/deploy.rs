use std::path::Path;

use anyhow::Result;

use hippo::application::DeployOptions;
use hippo::config::ToolPaths;
use hippo::infrastructure::{JsonEventSink, TracingEventSink};
use hippo::presentation::factory::create_deploy_use_case;
use hippo::presentation::output::{deploy_report_event, emit, render_deploy_report};

pub fn cmd_deploy(project_root: &Path, environment: &str, dry_run: bool, json: bool) -> Result<()> {
    let tools = ToolPaths::from_env();
    tracing::debug!(
        project_root = %project_root.display(),
        kubectl = %tools.kubectl.display(),
        git = %tools.git.display(),
        "deploy"
    );

    let use_case = create_deploy_use_case(project_root, &tools);
    let options = DeployOptions::new(project_root, environment).with_dry_run(dry_run);

    if json {
        let sink = JsonEventSink::stdout("deploy");
        let report = use_case.execute_with_events(&options, &sink)?;
        emit(deploy_report_event(&report))?;
        return Ok(());
    }

    let report = use_case.execute_with_events(&options, &TracingEventSink)?;

    if dry_run {
        // Manifest on stdout so it can be piped; summary on stderr.
        let manifest = report.context.rendered_manifest();
        print!("{}", manifest);
        if !manifest.ends_with('\n') {
            println!();
        }
        eprint!("{}", render_deploy_report(&report));
    } else {
        print!("{}", render_deploy_report(&report));
    }
    Ok(())
}
