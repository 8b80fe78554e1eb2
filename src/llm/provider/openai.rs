use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{build_endpoint, extract_api_key, process_commit_response, send_llm_request};
use super::utils::{DEFAULT_OPENAI_BASE, DEFAULT_OPENROUTER_BASE, OPENAI_API_SUFFIX};
use crate::config::{NetworkConfig, ProviderConfig, ProviderKind};
use crate::error::{AigcError, Result};
use crate::llm::LLMProvider;
use crate::llm::message::ChatMessage;

/// OpenAI-compatible chat completions provider
///
/// Serves three provider kinds that share the same wire format:
/// - **openai**: `https://api.openai.com/v1/chat/completions`
/// - **openrouter**: `https://openrouter.ai/api/v1/chat/completions`
/// - **custom**: any compatible endpoint; the URL is mandatory
///
/// # Configuration example
/// ```yaml
/// provider: openrouter
/// model: google/gemini-flash-1.5-8b
/// api_key: sk-or-...
/// ```
///
/// # Example
/// ```ignore
/// use aigc::config::{NetworkConfig, ProviderConfig, ProviderKind};
/// use aigc::llm::{LLMProvider, provider::openai::OpenAIProvider};
///
/// # async fn example() -> aigc::error::Result<()> {
/// let config = ProviderConfig {
///     provider: "openai".to_string(),
///     model: "gpt-4o-mini".to_string(),
///     api_key: Some("sk-...".to_string()),
///     endpoint: None,
/// };
/// let provider = OpenAIProvider::new(&config, ProviderKind::OpenAI, &NetworkConfig::default())?;
/// let message = provider.generate_commit_message("M\tsrc/main.rs", None, &[]).await?;
/// println!("Generated: {}", message);
/// # Ok(())
/// # }
/// ```
pub struct OpenAIProvider {
    name: &'static str,
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAIProvider {
    /// Builds an OpenAI-compatible provider from runtime configuration.
    ///
    /// `kind` must be one of openai, openrouter or custom; custom without an
    /// endpoint is rejected before the API key is looked up.
    pub fn new(
        config: &ProviderConfig,
        kind: ProviderKind,
        network_config: &NetworkConfig,
    ) -> Result<Self> {
        let (name, default_base) = match kind {
            ProviderKind::OpenAI => ("OpenAI", DEFAULT_OPENAI_BASE),
            ProviderKind::OpenRouter => ("OpenRouter", DEFAULT_OPENROUTER_BASE),
            ProviderKind::Custom => {
                if config.endpoint.as_deref().is_none_or(|e| e.trim().is_empty()) {
                    return Err(AigcError::Config(
                        "endpoint URL is required for custom provider".to_string(),
                    ));
                }
                ("Custom", "")
            }
            ProviderKind::Anthropic => {
                return Err(AigcError::Config(
                    "anthropic is not an OpenAI-compatible provider".to_string(),
                ));
            }
        };

        let api_key = extract_api_key(config, kind)?;
        let endpoint = build_endpoint(config, default_base, OPENAI_API_SUFFIX);

        Ok(Self {
            name,
            client: super::create_http_client(network_config)?,
            api_key,
            endpoint,
            model: config.model.clone(),
        })
    }

    /// Full endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn send_messages(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = OpenAIRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        tracing::debug!(
            "{} API request: model={}, messages={}",
            self.name,
            self.model,
            messages.len()
        );

        let auth_header = format!("Bearer {}", self.api_key);
        let response: OpenAIResponse = send_llm_request(
            &self.client,
            &self.endpoint,
            &[("Authorization", auth_header.as_str())],
            &request,
            self.name,
        )
        .await?;

        process_commit_response(
            response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content),
        )
    }

    fn name(&self) -> &str {
        self.name
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::llm::provider::test_utils::{
        ensure_crypto_provider, test_network_config, test_provider_config,
    };

    fn provider(url: String, kind: ProviderKind) -> OpenAIProvider {
        ensure_crypto_provider();
        OpenAIProvider::new(
            &test_provider_config(url, Some("sk-test".to_string()), "gpt-4o-mini".to_string()),
            kind,
            &test_network_config(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_openai_success_response_parsing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"feat: add login"}}]}"#)
            .create_async()
            .await;

        let result = provider(server.url(), ProviderKind::OpenAI)
            .send_messages(&[ChatMessage::user("hi")])
            .await
            .unwrap();

        assert_eq!(result, "feat: add login");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openai_request_body_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Json(json!({
                "model": "gpt-4o-mini",
                "stream": false,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "changes"}
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"chore: tidy"}}]}"#)
            .create_async()
            .await;

        let result = provider(server.url(), ProviderKind::OpenRouter)
            .send_messages(&[ChatMessage::system("sys"), ChatMessage::user("changes")])
            .await
            .unwrap();

        assert_eq!(result, "chore: tidy");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openai_first_choice_wins() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(
                r#"{"choices":[{"message":{"content":"fix: first"}},{"message":{"content":"fix: second"}}]}"#,
            )
            .create_async()
            .await;

        let result = provider(server.url(), ProviderKind::OpenAI)
            .send_messages(&[ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(result, "fix: first");
    }

    #[tokio::test]
    async fn test_openai_empty_choices() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = provider(server.url(), ProviderKind::OpenAI)
            .send_messages(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, AigcError::NoMessageGenerated));
        assert_eq!(err.to_string(), "no commit message generated");
    }

    #[tokio::test]
    async fn test_openai_blank_content() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"   "}}]}"#)
            .create_async()
            .await;

        let err = provider(server.url(), ProviderKind::OpenAI)
            .send_messages(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, AigcError::NoMessageGenerated));
    }

    #[tokio::test]
    async fn test_openai_fenced_content_is_cleaned() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(json!({"choices":[{"message":{"content":"```\nfeat: fenced\n```"}}]}).to_string())
            .create_async()
            .await;

        let result = provider(server.url(), ProviderKind::OpenAI)
            .send_messages(&[ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(result, "feat: fenced");
    }

    #[tokio::test]
    async fn test_openai_api_error_401() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let err = provider(server.url(), ProviderKind::OpenRouter)
            .send_messages(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, AigcError::LlmApi { status: 401, .. }));
        assert_eq!(err.to_string(), "OpenRouter API error (401): Unauthorized");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_custom_provider_uses_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"feat: custom"}}]}"#)
            .create_async()
            .await;

        let provider = provider(server.url(), ProviderKind::Custom);
        assert_eq!(provider.name(), "Custom");
        assert_eq!(
            provider.endpoint(),
            format!("{}/v1/chat/completions", server.url())
        );

        let result = provider.send_messages(&[ChatMessage::user("hi")]).await.unwrap();
        assert_eq!(result, "feat: custom");
        mock.assert_async().await;
    }

    #[test]
    fn test_custom_provider_requires_endpoint() {
        ensure_crypto_provider();
        let mut config = test_provider_config(
            String::new(),
            Some("sk-test".to_string()),
            "m".to_string(),
        );
        config.endpoint = None;

        let err = OpenAIProvider::new(&config, ProviderKind::Custom, &test_network_config())
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Configuration error: endpoint URL is required for custom provider"
        );
    }

    #[test]
    fn test_default_endpoints() {
        ensure_crypto_provider();
        let mut config =
            test_provider_config(String::new(), Some("sk-test".to_string()), "m".to_string());
        config.endpoint = None;

        let openai = OpenAIProvider::new(&config, ProviderKind::OpenAI, &test_network_config()).unwrap();
        assert_eq!(openai.endpoint(), "https://api.openai.com/v1/chat/completions");

        let openrouter =
            OpenAIProvider::new(&config, ProviderKind::OpenRouter, &test_network_config()).unwrap();
        assert_eq!(
            openrouter.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(openrouter.model(), "m");
    }
}
