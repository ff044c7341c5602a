//! Configuration loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{HippoError, HippoResult};

use super::types::ProjectConfiguration;

/// File name of the project configuration, relative to the project root
pub const CONFIG_FILE_NAME: &str = "hippo.yaml";

/// Environment variable overriding the kubectl binary
pub const KUBECTL_ENV: &str = "HIPPO_KUBECTL";

/// Environment variable overriding the git binary
pub const GIT_ENV: &str = "HIPPO_GIT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Path of `hippo.yaml` under a project root
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A missing file is `ConfigNotFound`; unparsable YAML is `InvalidConfig`.
pub fn load_with_warnings(path: &Path) -> HippoResult<(ProjectConfiguration, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HippoError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => HippoError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(&content);

    let config: ProjectConfiguration = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HippoError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// External tool locations, overridable through `HIPPO_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub kubectl: PathBuf,
    pub git: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            kubectl: PathBuf::from("kubectl"),
            git: PathBuf::from("git"),
        }
    }
}

impl ToolPaths {
    /// Defaults with `HIPPO_KUBECTL` / `HIPPO_GIT` applied
    pub fn from_env() -> Self {
        let mut tools = Self::default();
        if let Some(kubectl) = non_empty_var(KUBECTL_ENV) {
            tools.kubectl = PathBuf::from(kubectl);
        }
        if let Some(git) = non_empty_var(GIT_ENV) {
            tools.git = PathBuf::from(git);
        }
        tools
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// First line declaring `key` as a mapping key (`<indent>key:`), 1-based
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|tail| tail.trim_start().starts_with(':'))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "projectName",
        "language",
        "kubernetesContexts",
        "versionControl",
        "provider",
        "namespace",
        "project",
        "repository",
        "username",
        "password",
        "dockerRegistry",
        "name",
        "url",
        "user",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
