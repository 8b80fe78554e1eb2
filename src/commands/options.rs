//! command option structure
//!
//! Built from the parsed CLI and the loaded configuration, then passed to
//! `commands::commit::run()`.
//!
//! # Example
//! ```
//! use aigc::commands::options::CommitOptions;
//!
//! let options = CommitOptions {
//!     push: true,
//!     hint: Some("fix the login bug"),
//!     model_override: None,
//!     debug: false,
//!     colored: false,
//! };
//! assert!(!options.show_spinner());
//! ```

use crate::cli::Cli;
use crate::config::AppConfig;

/// Commit command options
///
/// # Field description
/// - `push`: run `git push` after a successful commit
/// - `hint`: user hint forwarded to the prompt (`--message`)
/// - `model_override`: `--model`, applies to this run only
/// - `debug`: `--debug` or `debug: true` in the config file
/// - `colored`: colored output (stdout is a terminal)
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions<'a> {
    /// Push after committing
    pub push: bool,

    /// Hint for the commit message
    pub hint: Option<&'a str>,

    /// Model used instead of the configured one
    pub model_override: Option<&'a str>,

    /// Debug mode
    pub debug: bool,

    /// Whether to color output
    pub colored: bool,
}

impl<'a> CommitOptions<'a> {
    /// Constructed from CLI parameters
    ///
    /// # Parameters
    /// - `cli`: parsed CLI parameters
    /// - `push`: `--push` flag
    /// - `hint`: `--message` value
    /// - `config`: loaded configuration (its `debug` flag is honored)
    /// - `colored`: whether stdout is a terminal
    pub fn from_cli(
        cli: &'a Cli,
        push: bool,
        hint: Option<&'a str>,
        config: &AppConfig,
        colored: bool,
    ) -> Self {
        Self {
            push,
            hint,
            model_override: cli.model.as_deref(),
            debug: cli.debug || config.debug,
            colored,
        }
    }

    /// The spinner would interleave with console logs, so it only runs in
    /// interactive, non-debug sessions.
    pub fn show_spinner(&self) -> bool {
        self.colored && !self.debug
    }
}
