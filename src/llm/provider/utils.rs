//! Provider utility functions
//!
//! Endpoint completion and API key masking

/// Anthropic messages API path
pub const ANTHROPIC_API_SUFFIX: &str = "/v1/messages";

/// OpenAI-compatible chat completions path
pub const OPENAI_API_SUFFIX: &str = "/v1/chat/completions";

/// Anthropic default base URL
pub const DEFAULT_ANTHROPIC_BASE: &str = "https://api.anthropic.com";

/// OpenAI default base URL
pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com";

/// OpenRouter default base URL
pub const DEFAULT_OPENROUTER_BASE: &str = "https://openrouter.ai/api";

/// Completes a configured endpoint with the provider's API path
///
/// # Behavior
/// 1. Trailing slashes are dropped
/// 2. A host without a path gets the whole API path
/// 3. A path ending with the API path, or with its leading segments
///    (`/v1`, `/v1/chat`), gets only the missing segments
/// 4. Any other path is an explicit endpoint and is used as given
///
/// # Example
/// ```
/// use aigc::llm::provider::utils::complete_endpoint;
///
/// assert_eq!(
///     complete_endpoint("http://localhost:8080/", "/v1/chat/completions"),
///     "http://localhost:8080/v1/chat/completions"
/// );
/// assert_eq!(
///     complete_endpoint("http://localhost:8080/v1", "/v1/chat/completions"),
///     "http://localhost:8080/v1/chat/completions"
/// );
/// assert_eq!(
///     complete_endpoint("https://proxy.example.com/generate", "/v1/chat/completions"),
///     "https://proxy.example.com/generate"
/// );
/// ```
pub fn complete_endpoint(base_url: &str, api_path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let wanted = segments(api_path);
    let have = segments(url_path(base));

    if have.is_empty() {
        return format!("{}/{}", base, wanted.join("/"));
    }

    // longest tail of the URL path that starts the API path
    let overlap = (1..=wanted.len().min(have.len()))
        .rev()
        .find(|&n| have[have.len() - n..] == wanted[..n]);

    match overlap {
        Some(n) if n < wanted.len() => format!("{}/{}", base, wanted[n..].join("/")),
        _ => base.to_string(),
    }
}

/// Path part of `url` without the leading slash (`""` when there is none)
fn url_path(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split_once('/')
        .map_or("", |(_, path)| path)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Mask API key to prevent leaks in output and logs
///
/// # Rule
/// - more than 8 characters: first 4 + `...` + last 4
/// - otherwise: `****`
///
/// # Example
/// ```
/// use aigc::llm::provider::utils::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-ant-api03-abcdefgh"), "sk-a...efgh");
/// assert_eq!(mask_api_key("short"), "****");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
