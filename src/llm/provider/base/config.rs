//! Provider configuration extraction tool
//!
//! Provides helper functions to extract various parameters from ProviderConfig

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{AigcError, Result};

use super::super::utils::complete_endpoint;

/// Extract API key
///
/// The configured key wins; otherwise the provider's environment variable
/// (e.g. `OPENROUTER_API_KEY`) is consulted. Blank values count as missing.
///
/// # Arguments
/// * `config` - Provider configuration
/// * `kind` - Provider kind (selects the environment variable and error text)
pub fn extract_api_key(config: &ProviderConfig, kind: ProviderKind) -> Result<String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            std::env::var(kind.api_key_env())
                .ok()
                .filter(|key| !key.trim().is_empty())
        })
        .ok_or_else(|| {
            AigcError::Config(format!(
                "API key not found for {}. Run 'aigc config --api-key <KEY>' or set {}",
                kind,
                kind.api_key_env()
            ))
        })
}

/// Build a complete endpoint
///
/// The provider's default base always gets the full API path. A configured
/// endpoint goes through [`complete_endpoint`], which keeps explicit paths
/// as given.
///
/// # Arguments
/// * `config` - Provider configuration
/// * `default_base` - default base URL
/// * `suffix` - API path suffix
pub fn build_endpoint(config: &ProviderConfig, default_base: &str, suffix: &str) -> String {
    match config.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(endpoint) => complete_endpoint(endpoint, suffix),
        None => format!("{}{}", default_base.trim_end_matches('/'), suffix),
    }
}
