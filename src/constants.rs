//! 全局常量定义

/// 配置相关常量
pub mod config {
    /// Directory under the user's home holding config and logs
    pub const APP_DIR_NAME: &str = ".aigc";

    /// Config file name inside [`APP_DIR_NAME`]
    pub const CONFIG_FILE_NAME: &str = "config.yaml";

    /// Log directory name inside [`APP_DIR_NAME`]
    pub const LOG_DIR_NAME: &str = "log";

    /// Per-repository rule file, read from the working directory
    pub const LOCAL_RULES_FILE: &str = ".aigcrules";

    /// 默认 provider
    pub const DEFAULT_PROVIDER: &str = "openrouter";

    /// 默认模型
    pub const DEFAULT_MODEL: &str = "google/gemini-flash-1.5-8b";
}

/// LLM 相关常量
pub mod llm {
    /// Anthropic requires max_tokens on every request
    pub const ANTHROPIC_MAX_TOKENS: u32 = 1000;

    /// Anthropic API version header value
    pub const ANTHROPIC_VERSION: &str = "2023-06-01";
}

/// 网络相关常量
pub mod network {
    /// 请求超时（秒）
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;

    /// 连接超时（秒）
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// UI 相关常量
pub mod ui {
    /// 错误预览最大长度
    pub const ERROR_PREVIEW_LENGTH: usize = 500;
}
