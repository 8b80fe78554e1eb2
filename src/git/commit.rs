use std::path::Path;
use std::process::{Command, Output};

use crate::error::{AigcError, Result};

/// Builds a `git` command, optionally rooted at `workdir`.
pub(crate) fn git_command(workdir: Option<&Path>) -> Command {
    let mut cmd = Command::new("git");
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }
    cmd
}

/// Runs git with `args`, returning stdout on success.
pub(crate) fn run_git(workdir: Option<&Path>, args: &[&str]) -> Result<String> {
    tracing::debug!("Running git {}", args.join(" "));
    let output = git_command(workdir).args(args).output().map_err(|e| {
        AigcError::GitCommand(format!("failed to run git {}: {}", args.join(" "), e))
    })?;

    if !output.status.success() {
        return Err(AigcError::GitCommand(format!(
            "git {} failed: {}",
            args.join(" "),
            failure_output(&output)
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Execute git commit
///
/// Use git CLI to support:
/// - GPG signature (commit.gpgsign, user.signingkey)
/// - Git hooks (pre-commit, commit-msg, etc.)
/// - All git config configurations
///
/// # Arguments
/// * `workdir` - Repository directory, `None` for the current directory
/// * `message` - Commit message
pub fn commit_changes(workdir: Option<&Path>, message: &str) -> Result<()> {
    let output = git_command(workdir)
        .args(["commit", "-m", message])
        .output()?;

    if !output.status.success() {
        return Err(AigcError::GitCommand(format!(
            "error committing changes: {}",
            failure_output(&output)
        )));
    }

    Ok(())
}

/// Execute git push
///
/// The error carries both streams, since git reports remote rejections on
/// stderr and hook output on stdout.
pub fn push_changes(workdir: Option<&Path>) -> Result<()> {
    let output = git_command(workdir).arg("push").output()?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(AigcError::GitCommand(format!(
            "failed to push changes ({}):\n{}",
            output.status,
            combined.trim()
        )));
    }

    Ok(())
}

fn failure_output(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        // Some git errors are output to stdout instead of stderr
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr.trim().to_string()
    }
}
