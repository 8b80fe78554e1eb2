//! Helpers shared by provider unit tests and the integration tests in `tests/`

use crate::config::{NetworkConfig, ProviderConfig};

/// Installs the ring crypto provider for rustls
///
/// The HTTP client is built without a default provider; the binary installs
/// one in `main`, tests go through here. Repeated calls are no-ops.
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Short timeouts so a broken mock fails fast instead of hanging the suite
pub fn test_network_config() -> NetworkConfig {
    NetworkConfig {
        request_timeout: 10,
        connect_timeout: 5,
    }
}

/// `ProviderConfig` pointing at a mock server
///
/// ```ignore
/// let server = mockito::Server::new_async().await;
/// let config = test_provider_config(server.url(), Some("sk-test".into()), "m".into());
/// ```
///
/// The provider field is `custom`; constructing `OpenAIProvider` or
/// `ClaudeProvider` directly does not look at it.
pub fn test_provider_config(
    base_url: String,
    api_key: Option<String>,
    model: String,
) -> ProviderConfig {
    ProviderConfig {
        provider: "custom".to_string(),
        model,
        api_key,
        endpoint: Some(base_url),
    }
}
