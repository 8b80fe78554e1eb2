//! # aigc
//!
//! AI-generated Git commit messages following the Conventional Commits standard.
//!
//! ## 功能
//! - **Commit message 生成**：`git add .` 后根据 `git diff --cached --name-status` 生成 commit message
//! - **多 Provider 支持**：OpenAI, Anthropic, OpenRouter 以及任意 OpenAI 兼容 endpoint
//! - **项目规则**：全局配置中的 rules 加上仓库中的 `.aigcrules`
//! - **提示**：`--message` 接受任意语言的提示，输出始终为英文
//!
//! ## 快速开始
//!
//! ```bash
//! aigc config --provider openrouter --api-key sk-or-...
//! aigc commit --message "修复登录问题" --push
//! ```
//!
//! ### 作为库使用
//! ```ignore
//! use aigc::config::{AppConfig, NetworkConfig};
//! use aigc::git::{GitOperations, GitRepository};
//! use aigc::llm::provider::create_provider;
//!
//! # async fn example() -> aigc::error::Result<()> {
//! let config = AppConfig::default();
//! let provider = create_provider(&config.provider_config(None), &NetworkConfig::default())?;
//!
//! let repo = GitRepository::new();
//! let changes = repo.stage_and_diff()?;
//! let message = provider.generate_commit_message(&changes, None, &config.rules).await?;
//! repo.commit(&message)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`git`] - Git 操作抽象
//! - [`llm`] - LLM provider 接口和实现
//! - [`commands`] - CLI 命令实现
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型
//! - [`logging`] - 日志文件与调试输出
//! - [`ui`] - 用户界面工具
//!
//! ## 配置
//! 配置文件位置：`~/.aigc/config.yaml`
//!
//! ```yaml
//! provider: openrouter
//! model: google/gemini-flash-1.5-8b
//! api_key: sk-or-...
//! debug: false
//! rules:
//!   - Mention the ticket id in the footer
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod logging;
pub mod ui;
