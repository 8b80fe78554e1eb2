pub mod commit;
pub mod repository;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use repository::GitRepository;

/// Git 操作的统一接口
///
/// The commit flow only needs three operations, all backed by the `git` CLI
/// so hooks, signing and the user's git config apply as usual.
/// Main implementation: [`GitRepository`](repository::GitRepository)
///
/// # 示例
/// ```no_run
/// use aigc::git::{GitOperations, GitRepository};
///
/// # fn main() -> aigc::error::Result<()> {
/// let repo = GitRepository::new();
/// let changes = repo.stage_and_diff()?;
/// println!("Staged changes:\n{}", changes);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// Stages the whole working tree and returns the staged name-status summary
    ///
    /// Equivalent to `git add .` followed by `git diff --cached --name-status`.
    ///
    /// # 错误
    /// - [`AigcError::GitCommand`] - either command exited non-zero
    /// - [`AigcError::NoStagedChanges`] - nothing is staged after `git add`
    ///
    /// [`AigcError::GitCommand`]: crate::error::AigcError::GitCommand
    /// [`AigcError::NoStagedChanges`]: crate::error::AigcError::NoStagedChanges
    fn stage_and_diff(&self) -> Result<String>;

    /// 执行 git commit
    ///
    /// Runs `git commit -m <message>`; pre-commit and commit-msg hooks fire.
    /// A rejected commit leaves the index untouched.
    fn commit(&self, message: &str) -> Result<()>;

    /// 执行 git push
    ///
    /// On failure the combined stdout/stderr of `git push` is part of the error.
    fn push(&self) -> Result<()>;
}
