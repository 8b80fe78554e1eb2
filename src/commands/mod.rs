//! Command implementations.
//!
//! # Modules
//! - `commit` - Commit message generation flow.
//! - `config` - Show and update the configuration.
//! - `options` - Command option structs.
//!
//! # Architecture
//! ```text
//! CLI (cli.rs)
//!   └── commands::run        logging -> load config -> dispatch
//!         ├── commands/commit.rs  stage -> generate -> commit -> push
//!         ├── commands/config.rs  show | apply flags + save
//!         └── shared command options (commands/options.rs)
//! ```

/// Commit generation command flow.
pub mod commit;
/// Configuration show/update command.
pub mod config;
/// Shared command option structs.
pub mod options;

pub use options::CommitOptions;

use tokio::runtime::Runtime;

use crate::cli::{Cli, Commands};
use crate::config::{AppPaths, ConfigStore};
use crate::error::{AigcError, Result};
use crate::{logging, ui};

/// 运行一次 CLI 调用
///
/// Logging starts before the configuration is read, so a broken config file
/// still leaves a record in the log directory. A config file that cannot be
/// parsed stops every command; nothing is saved on top of it.
pub fn run(cli: &Cli, paths: &AppPaths, colored: bool) -> Result<()> {
    let store = ConfigStore::new(paths.config_file());
    let loaded = store.load();

    let debug = cli.debug || loaded.as_ref().is_ok_and(|config| config.debug);
    match logging::init(&paths.log_dir(), debug) {
        Ok(path) => tracing::info!(
            "aigc {} started (log file: {})",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Err(e) => ui::warning(&format!("Logging disabled: {}", e), colored),
    }

    let config = loaded?;

    match &cli.command {
        Commands::Config(args) => {
            if cli.model.is_some() {
                return Err(AigcError::InvalidInput(
                    "--model before the subcommand only applies to commit; use 'aigc config --model <MODEL>' to change the default".to_string(),
                ));
            }
            config::run(args, &store, config, colored)
        }
        Commands::Commit { push, message } => {
            let options =
                CommitOptions::from_cli(cli, *push, message.as_deref(), &config, colored);
            let workdir = std::env::current_dir()?;

            let rt = Runtime::new()?;
            rt.block_on(commit::run(&options, &config, &workdir))
        }
    }
}
