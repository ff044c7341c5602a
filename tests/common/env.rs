//! Test environment builder for isolated Hippo testing.
//!
//! Provides `TestEnv` - a temp project directory, a temp tool directory with
//! scripted `git` and `kubectl` stand-ins, and helpers to run the hippo CLI.
//! The fake tools append every invocation to `git.log` / `kubectl.log` so
//! tests can assert which external calls were (or were not) made.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::{ACME_COMMIT, ACME_CONFIG, ACME_TEMPLATE};

/// Result of running a hippo CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// State of the repository the fake git reports
#[derive(Debug, Clone)]
pub enum FakeRepo {
    /// HEAD resolves to this commit
    Commit(String),
    /// Repository exists but HEAD is unborn
    NoCommits,
    /// Not inside a work tree
    NotARepository,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory holding the fake tools and their call logs
    pub tools_dir: TempDir,
    hippo_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run hippo against this project (`-C <project root>`)
    pub fn run(&self, args: &[&str]) -> TestResult {
        let root = self.project_root.path().to_string_lossy().to_string();
        let mut full: Vec<&str> = vec!["-C", root.as_str()];
        full.extend_from_slice(args);
        self.run_from(self.project_root.path(), &full)
    }

    /// Run hippo from a specific directory, without adding `-C`
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.hippo_bin)
            .current_dir(cwd)
            .args(args)
            .env("HIPPO_GIT", self.tools_dir.path().join("git"))
            .env("HIPPO_KUBECTL", self.tools_dir.path().join("kubectl"))
            .env("NO_COLOR", "1")
            .env_remove("HIPPO_LOG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute hippo");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Everything the fake kubectl was asked to do; empty when never called
    pub fn kubectl_log(&self) -> String {
        std::fs::read_to_string(self.tools_dir.path().join("kubectl.log")).unwrap_or_default()
    }

    /// `ARGS ...` lines of the kubectl log
    pub fn kubectl_calls(&self) -> Vec<String> {
        self.kubectl_log()
            .lines()
            .filter_map(|line| line.strip_prefix("ARGS "))
            .map(str::to_string)
            .collect()
    }

    /// Everything the fake git was asked to do; empty when never called
    pub fn git_log(&self) -> String {
        std::fs::read_to_string(self.tools_dir.path().join("git.log")).unwrap_or_default()
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write project file");
    }
}

/// Builder for `TestEnv`; defaults to the acme project at commit `abc123`
pub struct TestEnvBuilder {
    config: Option<String>,
    template: Option<String>,
    repo: FakeRepo,
    kubectl_fail_on: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: Some(ACME_CONFIG.to_string()),
            template: Some(ACME_TEMPLATE.to_string()),
            repo: FakeRepo::Commit(ACME_COMMIT.to_string()),
            kubectl_fail_on: None,
        }
    }

    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }

    pub fn without_config(mut self) -> Self {
        self.config = None;
        self
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.template = Some(template.to_string());
        self
    }

    pub fn without_template(mut self) -> Self {
        self.template = None;
        self
    }

    pub fn with_repo(mut self, repo: FakeRepo) -> Self {
        self.repo = repo;
        self
    }

    /// Make kubectl exit 1 when `subcommand` (e.g. `apply`) appears in its arguments
    pub fn kubectl_fails_on(mut self, subcommand: &str) -> Self {
        self.kubectl_fail_on = Some(subcommand.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let tools_dir = TempDir::new().expect("Failed to create tools dir");

        if let Some(config) = &self.config {
            std::fs::write(project_root.path().join("hippo.yaml"), config).unwrap();
        }
        if let Some(template) = &self.template {
            let dir = project_root.path().join("deployment_files");
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("deploy.yaml"), template).unwrap();
        }

        write_script(
            &tools_dir.path().join("git"),
            &fake_git(&tools_dir.path().join("git.log"), &self.repo),
        );
        write_script(
            &tools_dir.path().join("kubectl"),
            &fake_kubectl(
                &tools_dir.path().join("kubectl.log"),
                self.kubectl_fail_on.as_deref(),
            ),
        );

        TestEnv {
            project_root,
            tools_dir,
            hippo_bin: PathBuf::from(env!("CARGO_BIN_EXE_hippo")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).expect("Failed to write fake tool");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake tool executable");
}

fn fake_git(log: &Path, repo: &FakeRepo) -> String {
    let behaviour = match repo {
        FakeRepo::Commit(commit) => format!(
            "case \"$2\" in\n  --is-inside-work-tree) echo true ;;\n  --verify) echo {commit} ;;\nesac\n"
        ),
        FakeRepo::NoCommits => {
            "case \"$2\" in\n  --is-inside-work-tree) echo true ;;\n  *) exit 1 ;;\nesac\n"
                .to_string()
        }
        FakeRepo::NotARepository => {
            "echo 'fatal: not a git repository (or any of the parent directories): .git' >&2\nexit 128\n"
                .to_string()
        }
    };
    format!(
        "#!/bin/sh\necho \"ARGS $*\" >> '{log}'\n{behaviour}",
        log = log.display()
    )
}

fn fake_kubectl(log: &Path, fail_on: Option<&str>) -> String {
    let failure = match fail_on {
        Some(subcommand) => format!(
            "case \" $* \" in\n  *\" {subcommand} \"*) echo \"error: {subcommand} rejected by fake cluster\" >&2; exit 1 ;;\nesac\n"
        ),
        None => String::new(),
    };
    format!(
        r#"#!/bin/sh
echo "ARGS $*" >> '{log}'
prev=""
for arg in "$@"; do
  if [ "$prev" = "-f" ]; then cat "$arg" >> '{log}'; echo >> '{log}'; fi
  prev="$arg"
done
{failure}exit 0
"#,
        log = log.display()
    )
}
