use thiserror::Error;

pub type Result<T> = std::result::Result<T, AigcError>;

#[derive(Error, Debug)]
pub enum AigcError {
    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("{provider} API error ({status}): {message}")]
    LlmApi {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("no commit message generated")]
    NoMessageGenerated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AigcError {
    /// 面向用户的修复提示
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AigcError::NoStagedChanges => {
                Some("Make some changes in the working tree first; aigc stages everything with 'git add .'")
            }
            AigcError::Config(msg) if msg.contains("API key not found") => {
                Some("Run 'aigc config --api-key <KEY>' or export the provider's API key variable")
            }
            AigcError::Config(msg) if msg.contains("endpoint") => {
                Some("Run 'aigc config --endpoint <URL>' to point the custom provider at an API")
            }
            AigcError::ConfigParse(_) => {
                Some("Fix or delete ~/.aigc/config.yaml; defaults are used when it is missing")
            }
            AigcError::UnsupportedProvider(_) => {
                Some("Supported providers: openai, anthropic, openrouter, custom")
            }
            AigcError::Network(_) => {
                Some("Check your network and proxy settings")
            }
            AigcError::Llm(msg) if msg.contains("timeout") => {
                Some("The provider took too long to answer; try again or pick a faster model with --model")
            }
            AigcError::Llm(msg) if msg.contains("connection failed") => {
                Some("Could not reach the provider; check the endpoint URL and your network")
            }
            AigcError::Llm(msg) if msg.contains("Failed to parse") => {
                Some("Try the --debug flag to see the full provider response")
            }
            AigcError::LlmApi { status: 401, .. } | AigcError::LlmApi { status: 403, .. } => {
                Some("The provider rejected the API key; set a valid one with 'aigc config --api-key <KEY>'")
            }
            AigcError::LlmApi { status: 404, .. } => {
                Some("Check the model name and endpoint URL")
            }
            AigcError::LlmApi { status: 429, .. } => {
                Some("Rate limited by the provider; wait a bit before retrying")
            }
            AigcError::LlmApi { status, .. } if *status >= 500 => {
                Some("The provider is having trouble right now; try again shortly")
            }
            AigcError::NoMessageGenerated => {
                Some("Your changes are still staged; run the command again or try another model")
            }
            _ => None,
        }
    }
}
