//! Configuration management.
//!
//! - [`schema`] - persisted [`AppConfig`] plus per-run provider/network settings
//! - [`loader`] - config file location, load/save, and `.aigcrules`
//!
//! 配置文件位置：`~/.aigc/config.yaml`。文件不存在时使用默认值，
//! 仅 `config` 子命令会写回。

pub mod loader;
pub mod schema;

pub use loader::{AppPaths, ConfigStore, load_local_rules};
pub use schema::*;
