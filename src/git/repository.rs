use std::path::PathBuf;

use super::GitOperations;
use super::commit::{commit_changes, push_changes, run_git};
use crate::error::{AigcError, Result};

/// [`GitOperations`] backed by the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct GitRepository {
    workdir: Option<PathBuf>,
}

impl GitRepository {
    /// Operates on the repository containing the current directory.
    pub fn new() -> Self {
        Self { workdir: None }
    }

    /// Operates on the repository at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }
}

impl GitOperations for GitRepository {
    fn stage_and_diff(&self) -> Result<String> {
        let workdir = self.workdir.as_deref();

        run_git(workdir, &["add", "."])?;
        let changes = run_git(workdir, &["diff", "--cached", "--name-status"])?;

        if changes.trim().is_empty() {
            return Err(AigcError::NoStagedChanges);
        }

        Ok(changes)
    }

    fn commit(&self, message: &str) -> Result<()> {
        commit_changes(self.workdir.as_deref(), message)
    }

    fn push(&self) -> Result<()> {
        push_changes(self.workdir.as_deref())
    }
}
