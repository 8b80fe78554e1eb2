use clap::{Args, Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "aigc")]
#[command(author, version, long_about = None)]
#[command(about = "Generate Conventional Commits messages from staged changes with an AI provider")]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on the console
    #[arg(long)]
    pub debug: bool,

    /// Override the configured model for this commit (not accepted by `config`)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or update the configuration
    Config(ConfigArgs),

    /// Stage all changes, generate a commit message and commit
    Commit {
        /// Push after committing
        #[arg(short, long)]
        push: bool,

        /// Hint for the commit message (any language)
        #[arg(short, long, value_name = "HINT")]
        message: Option<String>,
    },
}

/// Flags of the `config` subcommand; all absent means "show"
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// AI provider: openai, anthropic, openrouter or custom
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// API key for the provider
    #[arg(long, alias = "apikey", value_name = "KEY")]
    pub api_key: Option<String>,

    /// API endpoint (required for the custom provider, "" clears it)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Persist debug mode
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub debug: Option<bool>,

    /// Add a commit message rule (repeatable)
    #[arg(long = "rule", alias = "rules", value_name = "RULE")]
    pub rules: Vec<String>,

    /// Remove all configured rules (applied before --rule)
    #[arg(long)]
    pub clear_rules: bool,
}

impl ConfigArgs {
    /// Whether any flag was given
    pub fn has_changes(&self) -> bool {
        self.provider.is_some()
            || self.model.is_some()
            || self.api_key.is_some()
            || self.endpoint.is_some()
            || self.debug.is_some()
            || !self.rules.is_empty()
            || self.clear_rules
    }
}
