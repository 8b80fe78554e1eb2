pub mod base;
pub mod claude;
pub mod openai;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::{NetworkConfig, ProviderConfig, ProviderKind};
use crate::error::{AigcError, Result};
use crate::llm::LLMProvider;

/// Creates the HTTP client a provider sends requests with
///
/// Carries the `aigc/<version> (<os>)` user agent plus the request and
/// connect timeouts from `network_config`.
pub(crate) fn create_http_client(network_config: &NetworkConfig) -> Result<Client> {
    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(network_config.request_timeout))
        .connect_timeout(Duration::from_secs(network_config.connect_timeout))
        .build()
        .map_err(|e| AigcError::Llm(format!("Failed to create HTTP client: {}", e)))
}

/// Creates the LLM provider named by `config.provider`
///
/// Validation happens here, before anything touches the repository:
/// an unknown name yields [`AigcError::UnsupportedProvider`], a custom
/// provider without an endpoint or any provider without an API key yields
/// [`AigcError::Config`].
pub fn create_provider(
    config: &ProviderConfig,
    network_config: &NetworkConfig,
) -> Result<Arc<dyn LLMProvider>> {
    let kind: ProviderKind = config.provider.parse()?;

    tracing::debug!("Creating provider {} (model: {})", kind, config.model);

    match kind {
        ProviderKind::Anthropic => {
            let provider = claude::ClaudeProvider::new(config, network_config)?;
            Ok(Arc::new(provider))
        }
        ProviderKind::OpenAI | ProviderKind::OpenRouter | ProviderKind::Custom => {
            let provider = openai::OpenAIProvider::new(config, kind, network_config)?;
            Ok(Arc::new(provider))
        }
    }
}
