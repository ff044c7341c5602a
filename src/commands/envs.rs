use std::path::Path;

use anyhow::Result;

use hippo::domain::ports::ConfigRepository;
use hippo::infrastructure::YamlConfigRepository;
use hippo::presentation::output::{emit, environments_event, render_environments};

pub fn cmd_envs(project_root: &Path, json: bool) -> Result<()> {
    let (config, warnings) = YamlConfigRepository::new().load_with_warnings(project_root)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    if json {
        emit(environments_event(&config))?;
    } else {
        print!("{}", render_environments(&config));
    }
    Ok(())
}
