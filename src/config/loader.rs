// 配置加载逻辑
//
// 此文件负责定位 ~/.aigc、读写 config.yaml，以及读取仓库本地的 .aigcrules。

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::schema::AppConfig;
use crate::constants;
use crate::error::{AigcError, Result};

/// Filesystem locations used by the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Resolves `<home>/.aigc`.
    pub fn discover() -> Result<Self> {
        let base = BaseDirs::new().ok_or_else(|| {
            AigcError::Config("Could not determine the home directory".to_string())
        })?;
        Ok(Self::from_root(
            base.home_dir().join(constants::config::APP_DIR_NAME),
        ))
    }

    /// Uses an explicit root directory (tests, alternative homes).
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(constants::config::CONFIG_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(constants::config::LOG_DIR_NAME)
    }
}

/// Reads and writes the YAML config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置
    ///
    /// A missing file yields [`AppConfig::default`]; a malformed one is an error.
    pub fn load(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Config file {} not found, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// 保存配置（覆盖写入）
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let content = serde_yaml_ng::to_string(config)?;

        if let Some(parent) = self.path.parent() {
            create_private_dir(parent)?;
        }

        fs::write(&self.path, content)?;
        restrict_permissions(&self.path, 0o600)?;

        tracing::info!("Configuration saved to {}", self.path.display());
        Ok(())
    }
}

fn create_private_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    restrict_permissions(dir, 0o700)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// 读取仓库本地规则文件 `.aigcrules`
///
/// Accepts a YAML list of strings or plain text with one rule per line.
/// Returns an empty list when the file does not exist.
pub fn load_local_rules(dir: &Path) -> Result<Vec<String>> {
    let path = dir.join(constants::config::LOCAL_RULES_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let rules = parse_rules(&content);
    tracing::debug!(content = %content, "Loaded {} local rule(s)", rules.len());
    Ok(rules)
}

fn parse_rules(content: &str) -> Vec<String> {
    if let Ok(list) = serde_yaml_ng::from_str::<Vec<String>>(content) {
        return list
            .into_iter()
            .map(|rule| rule.trim().to_string())
            .filter(|rule| !rule.is_empty())
            .collect();
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
