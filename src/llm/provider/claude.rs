use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{build_endpoint, extract_api_key, process_commit_response, send_llm_request};
use super::utils::{ANTHROPIC_API_SUFFIX, DEFAULT_ANTHROPIC_BASE};
use crate::config::{NetworkConfig, ProviderConfig, ProviderKind};
use crate::constants::llm::{ANTHROPIC_MAX_TOKENS, ANTHROPIC_VERSION};
use crate::error::Result;
use crate::llm::LLMProvider;
use crate::llm::message::{ChatMessage, Role};

/// Anthropic messages API provider
///
/// The messages API has no `system` role inside `messages`, so system
/// content is joined into the top-level `system` field and only user
/// messages are sent in the list.
pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ClaudeRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<&'a ChatMessage>,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl ClaudeProvider {
    pub fn new(config: &ProviderConfig, network_config: &NetworkConfig) -> Result<Self> {
        let api_key = extract_api_key(config, ProviderKind::Anthropic)?;
        let endpoint = build_endpoint(config, DEFAULT_ANTHROPIC_BASE, ANTHROPIC_API_SUFFIX);

        Ok(Self {
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

fn build_request<'a>(model: &'a str, messages: &'a [ChatMessage]) -> ClaudeRequest<'a> {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
        .collect();

    ClaudeRequest {
        model,
        max_tokens: ANTHROPIC_MAX_TOKENS,
        system: (!system.is_empty()).then(|| system.join("\n\n")),
        messages: messages.iter().filter(|m| m.role != Role::System).collect(),
    }
}

#[async_trait]
impl LLMProvider for ClaudeProvider {
    async fn send_messages(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = build_request(&self.model, messages);

        tracing::debug!(
            "Claude API request: model={}, max_tokens={}, messages={}",
            self.model,
            request.max_tokens,
            request.messages.len()
        );

        let response: ClaudeResponse = send_llm_request(
            &self.client,
            &self.endpoint,
            &[
                ("x-api-key", self.api_key.as_str()),
                ("anthropic-version", ANTHROPIC_VERSION),
            ],
            &request,
            "Anthropic",
        )
        .await?;

        process_commit_response(
            response
                .content
                .into_iter()
                .find(|block| block.content_type == "text")
                .and_then(|block| block.text),
        )
    }

    fn name(&self) -> &str {
        "Anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
