//! GitRepository 测试（使用真实 git）
//!
//! 每个测试在临时目录中初始化仓库：
//! - 没有改动时返回 NoStagedChanges
//! - name-status 输出
//! - commit 成功 / 失败
//! - 无 remote 时 push 失败并携带输出

use aigc::error::{AigcError, Result};
use aigc::git::{GitOperations, GitRepository};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

// ========== 辅助函数 ==========

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("git must be installed to run these tests");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn init_git_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init", "-q"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    temp_dir
}

fn last_commit_message(dir: &Path) -> String {
    git(dir, &["log", "-1", "--pretty=%B"]).trim().to_string()
}

// ========== stage_and_diff ==========

#[test]
fn test_no_changes_is_no_staged_changes() {
    let temp_dir = init_git_repo();
    let repo = GitRepository::at(temp_dir.path());

    let err = repo.stage_and_diff().unwrap_err();
    assert!(matches!(err, AigcError::NoStagedChanges));
}

#[test]
fn test_stage_and_diff_lists_new_file() -> Result<()> {
    let temp_dir = init_git_repo();
    fs::write(temp_dir.path().join("hello.txt"), "hello\n")?;

    let changes = GitRepository::at(temp_dir.path()).stage_and_diff()?;

    assert_eq!(changes.trim(), "A\thello.txt");
    Ok(())
}

#[test]
fn test_stage_and_diff_stages_everything() -> Result<()> {
    let temp_dir = init_git_repo();
    let path = temp_dir.path();
    fs::write(path.join("keep.txt"), "v1\n")?;
    fs::write(path.join("gone.txt"), "bye\n")?;
    git(path, &["add", "."]);
    git(path, &["commit", "-q", "-m", "chore: initial"]);

    fs::write(path.join("keep.txt"), "v2\n")?;
    fs::remove_file(path.join("gone.txt"))?;
    fs::create_dir(path.join("src"))?;
    fs::write(path.join("src").join("new.rs"), "fn main() {}\n")?;

    let changes = GitRepository::at(path).stage_and_diff()?;
    let lines: Vec<&str> = changes.lines().collect();

    assert!(lines.contains(&"D\tgone.txt"));
    assert!(lines.contains(&"M\tkeep.txt"));
    assert!(lines.contains(&"A\tsrc/new.rs"));
    Ok(())
}

#[test]
fn test_stage_and_diff_outside_repository() {
    let temp_dir = TempDir::new().unwrap();
    // the directory does not exist, so git cannot even start
    let err = GitRepository::at(temp_dir.path().join("missing"))
        .stage_and_diff()
        .unwrap_err();

    assert!(matches!(err, AigcError::GitCommand(_)));
}

// ========== commit ==========

#[test]
fn test_commit_uses_message_verbatim() -> Result<()> {
    let temp_dir = init_git_repo();
    let path = temp_dir.path();
    fs::write(path.join("README.md"), "# demo\n")?;

    let repo = GitRepository::at(path);
    repo.stage_and_diff()?;
    repo.commit("docs: add README\n\nExplain how to run the demo.")?;

    assert_eq!(
        last_commit_message(path),
        "docs: add README\n\nExplain how to run the demo."
    );
    // nothing left to stage afterwards
    assert!(matches!(
        repo.stage_and_diff().unwrap_err(),
        AigcError::NoStagedChanges
    ));
    Ok(())
}

#[test]
fn test_commit_without_staged_changes_fails() {
    let temp_dir = init_git_repo();

    let err = GitRepository::at(temp_dir.path())
        .commit("chore: nothing")
        .unwrap_err();

    match err {
        AigcError::GitCommand(msg) => assert!(msg.starts_with("error committing changes")),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ========== push ==========

#[test]
fn test_push_without_remote_reports_output() -> Result<()> {
    let temp_dir = init_git_repo();
    let path = temp_dir.path();
    fs::write(path.join("a.txt"), "a\n")?;

    let repo = GitRepository::at(path);
    repo.stage_and_diff()?;
    repo.commit("feat: add a")?;

    let err = repo.push().unwrap_err();
    match err {
        AigcError::GitCommand(msg) => {
            assert!(msg.starts_with("failed to push changes"));
            // git explains the missing push destination
            assert!(msg.lines().count() > 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_push_to_local_bare_remote() -> Result<()> {
    let remote_dir = TempDir::new()?;
    git(remote_dir.path(), &["init", "-q", "--bare"]);

    let temp_dir = init_git_repo();
    let path = temp_dir.path();
    git(
        path,
        &["remote", "add", "origin", &remote_dir.path().display().to_string()],
    );
    fs::write(path.join("a.txt"), "a\n")?;

    let repo = GitRepository::at(path);
    repo.stage_and_diff()?;
    repo.commit("feat: add a")?;

    let branch = git(path, &["rev-parse", "--abbrev-ref", "HEAD"]);
    git(path, &["config", "push.default", "current"]);
    repo.push()?;

    let pushed = git(
        remote_dir.path(),
        &["log", "-1", "--pretty=%s", branch.trim()],
    );
    assert_eq!(pushed.trim(), "feat: add a");
    Ok(())
}
