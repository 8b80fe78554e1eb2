//! LLM abstractions and the provider trait.
//!
//! This module defines the provider interface used by the commit flow.

/// Chat message types.
pub mod message;
/// Prompt-building utilities for commit message generation.
pub mod prompt;
/// Built-in provider implementations and factory helpers.
pub mod provider;

use async_trait::async_trait;

use crate::error::Result;
use message::ChatMessage;

/// Unified interface implemented by all LLM providers.
///
/// # Architecture
///
/// The only **required** methods are [`send_messages`] and [`name`].
/// [`generate_commit_message`] is a default implementation that builds the
/// message list via [`llm::prompt`](crate::llm::prompt) and delegates to
/// `send_messages`.
///
/// # Implementer Notes
/// 1. Implement `Send + Sync` (required in async contexts).
/// 2. Return [`AigcError::NoMessageGenerated`] instead of an empty string.
/// 3. Validate configuration (API key, endpoint) in the constructor so that
///    nothing reaches the network with an incomplete setup.
///
/// # Built-In Implementations
/// - [`OpenAIProvider`](provider::openai::OpenAIProvider) - OpenAI, OpenRouter and custom endpoints
/// - [`ClaudeProvider`](provider::claude::ClaudeProvider) - Anthropic messages API
///
/// # Custom Provider Example
/// ```no_run
/// use async_trait::async_trait;
/// use aigc::error::Result;
/// use aigc::llm::LLMProvider;
/// use aigc::llm::message::ChatMessage;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl LLMProvider for EchoProvider {
///     async fn send_messages(&self, messages: &[ChatMessage]) -> Result<String> {
///         Ok(format!("chore: echo {} messages", messages.len()))
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
///
/// [`send_messages`]: LLMProvider::send_messages
/// [`name`]: LLMProvider::name
/// [`generate_commit_message`]: LLMProvider::generate_commit_message
/// [`AigcError::NoMessageGenerated`]: crate::error::AigcError::NoMessageGenerated
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends a pre-built message list and returns the generated text.
    async fn send_messages(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Provider name (used for logs and error messages).
    fn name(&self) -> &str;

    /// Model the provider sends requests to.
    fn model(&self) -> &str {
        ""
    }

    /// Generates a commit message from the staged change summary.
    ///
    /// # Parameters
    /// - `changes`: output of `git diff --cached --name-status`
    /// - `hint`: optional user hint, any language
    /// - `rules`: project rules, rendered one bullet each
    async fn generate_commit_message(
        &self,
        changes: &str,
        hint: Option<&str>,
        rules: &[String],
    ) -> Result<String> {
        let messages = prompt::build_commit_messages(changes, hint, rules);
        tracing::debug!(
            "Commit prompt built: {} message(s), {} rule(s)",
            messages.len(),
            rules.len()
        );
        let response = self.send_messages(&messages).await?;
        tracing::debug!(content = %response, "Generated commit message");
        Ok(response)
    }
}
