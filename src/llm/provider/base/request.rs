//! HTTP request sending
//!
//! One POST per generation: network errors are classified, non-2xx
//! statuses become [`AigcError::LlmApi`], bodies are parsed as JSON.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::response::truncate_for_preview;
use crate::error::{AigcError, Result};

/// Send the request once (only handles network layer errors)
async fn try_send_request<Req: Serialize>(
    client: &Client,
    endpoint: &str,
    headers: &[(&str, &str)],
    request_body: &Req,
    provider_name: &str,
) -> Result<reqwest::Response> {
    let mut req = client
        .post(endpoint)
        .header("Content-Type", "application/json");

    for (key, value) in headers {
        req = req.header(*key, *value);
    }

    tracing::debug!("Sending request to: {}", endpoint);

    req.json(request_body).send().await.map_err(|e| {
        let error_type = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connection failed"
        } else if e.is_request() {
            "request error"
        } else if e.is_body() {
            "body error"
        } else {
            "unknown"
        };

        tracing::debug!(
            "{} API request failed [{}]: {}",
            provider_name,
            error_type,
            e
        );

        if e.is_timeout() {
            AigcError::Llm(format!("{} API request timeout: {}", provider_name, e))
        } else if e.is_connect() {
            AigcError::Llm(format!("{} API connection failed: {}", provider_name, e))
        } else {
            AigcError::Network(e)
        }
    })
}

/// Generic function for sending LLM API requests
///
/// # Arguments
/// * `client` - HTTP client
/// * `endpoint` - full API endpoint
/// * `headers` - extra request headers (auth, versioning)
/// * `request_body` - JSON request body
/// * `provider_name` - Provider name (for logs and error messages)
pub async fn send_llm_request<Req, Resp>(
    client: &Client,
    endpoint: &str,
    headers: &[(&str, &str)],
    request_body: &Req,
    provider_name: &str,
) -> Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let response = try_send_request(client, endpoint, headers, request_body, provider_name).await?;

    let status = response.status();
    let response_text = response.text().await?;

    tracing::debug!("{} API response status: {}", provider_name, status);
    tracing::debug!(content = %response_text, "{} API response body", provider_name);

    if !status.is_success() {
        return Err(AigcError::LlmApi {
            provider: provider_name.to_string(),
            status: status.as_u16(),
            message: truncate_for_preview(&response_text),
        });
    }

    serde_json::from_str(&response_text).map_err(|e| {
        AigcError::Llm(format!(
            "Failed to parse {} response: {}. Raw response: {}",
            provider_name,
            e,
            truncate_for_preview(&response_text)
        ))
    })
}
