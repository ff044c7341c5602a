//! Git Version Source
//!
//! Resolves the current commit by shelling out to `git` in the project
//! directory. Only the local working copy is consulted; remote credentials
//! from `hippo.yaml` are never used here.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{VcsError, VersionSource};
use crate::domain::value_objects::CommitId;
use crate::infrastructure::process::{diagnostic, program_name};

/// Version source backed by the `git` CLI
pub struct GitVersionSource {
    /// git binary (bare name resolved through PATH, or explicit path)
    program: PathBuf,
    /// Directory git runs in
    work_dir: PathBuf,
}

impl GitVersionSource {
    pub fn new(program: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            work_dir: work_dir.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<std::process::Output, VcsError> {
        tracing::debug!(program = %self.program.display(), ?args, "running git");
        Command::new(&self.program)
            .args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                VcsError::NoRepository(format!(
                    "failed to run {}: {}",
                    program_name(&self.program),
                    e
                ))
            })
    }
}

impl VersionSource for GitVersionSource {
    fn current_revision(&self) -> Result<CommitId, VcsError> {
        let inside = self.git(&["rev-parse", "--is-inside-work-tree"])?;
        if !inside.status.success() {
            return Err(VcsError::NoRepository(diagnostic(&inside)));
        }
        if String::from_utf8_lossy(&inside.stdout).trim() != "true" {
            return Err(VcsError::NoRepository(format!(
                "{} is not inside a git work tree",
                self.work_dir.display()
            )));
        }

        let head = self.git(&["rev-parse", "--verify", "--quiet", "HEAD^{commit}"])?;
        if !head.status.success() {
            return Err(VcsError::NoCommits);
        }

        let id = CommitId::new(String::from_utf8_lossy(&head.stdout));
        if id.as_str().is_empty() {
            return Err(VcsError::NoCommits);
        }

        tracing::debug!(commit = %id, "resolved current revision");
        Ok(id)
    }
}
