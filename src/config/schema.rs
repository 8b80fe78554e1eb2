//! Configuration structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants;
use crate::error::AigcError;
use crate::llm::provider::utils::mask_api_key;

/// Persisted application configuration (`~/.aigc/config.yaml`).
///
/// # Example
/// ```yaml
/// provider: anthropic
/// model: claude-3-5-haiku-latest
/// api_key: sk-ant-...
/// endpoint: https://api.anthropic.com # optional
/// debug: false
/// rules:
///   - Use lowercase descriptions
///   - Mention the ticket id in the footer
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Provider name, see [`ProviderKind`].
    ///
    /// Kept as a string so an unknown name survives loading and is reported
    /// when the provider is built.
    pub provider: String,

    /// Model identifier passed to the provider.
    pub model: String,

    /// API key (empty when unset).
    pub api_key: String,

    /// Endpoint override; required for the `custom` provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Write debug logs and echo them to the console.
    pub debug: bool,

    /// Extra commit message rules, one per entry.
    #[serde(deserialize_with = "deserialize_rules")]
    pub rules: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: constants::config::DEFAULT_PROVIDER.to_string(),
            model: constants::config::DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            endpoint: None,
            debug: false,
            rules: Vec::new(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &mask_api_key(&self.api_key))
            .field("endpoint", &self.endpoint)
            .field("debug", &self.debug)
            .field("rules", &self.rules)
            .finish()
    }
}

impl AppConfig {
    /// Builds the per-run provider view, applying an optional model override.
    pub fn provider_config(&self, model_override: Option<&str>) -> ProviderConfig {
        let model = model_override
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.model.as_str())
            .to_string();

        ProviderConfig {
            provider: self.provider.clone(),
            model,
            api_key: Some(self.api_key.clone()).filter(|k| !k.is_empty()),
            endpoint: self.endpoint.clone().filter(|e| !e.trim().is_empty()),
        }
    }
}

/// Accepts both the list form and the older newline-separated string form.
fn deserialize_rules<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RulesRepr {
        List(Vec<String>),
        Text(String),
    }

    let rules = match Option::<RulesRepr>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RulesRepr::List(list)) => list,
        Some(RulesRepr::Text(text)) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
    };
    Ok(rules)
}

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// OpenAI chat completions API.
    OpenAI,
    /// Anthropic messages API.
    Anthropic,
    /// OpenRouter (OpenAI-compatible).
    OpenRouter,
    /// Any OpenAI-compatible endpoint; requires an explicit URL.
    Custom,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::OpenRouter,
        ProviderKind::Custom,
    ];

    /// Environment variable consulted when no API key is configured.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::OpenRouter => "OPENROUTER_API_KEY",
            ProviderKind::Custom => "AIGC_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAI => write!(f, "openai"),
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::OpenRouter => write!(f, "openrouter"),
            ProviderKind::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = AigcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "openrouter" => Ok(ProviderKind::OpenRouter),
            "custom" => Ok(ProviderKind::Custom),
            _ => Err(AigcError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Provider settings for a single run.
///
/// Built from [`AppConfig::provider_config`]; never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider name as configured.
    pub provider: String,
    /// Model name.
    pub model: String,
    /// API key, `None` when not configured.
    pub api_key: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// HTTP client timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Whole-request timeout in seconds.
    pub request_timeout: u64,
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: constants::network::REQUEST_TIMEOUT_SECS,
            connect_timeout: constants::network::CONNECT_TIMEOUT_SECS,
        }
    }
}
