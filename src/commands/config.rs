use std::fmt::Write;
use std::path::Path;

use crate::cli::ConfigArgs;
use crate::config::{AppConfig, ConfigStore, ProviderKind};
use crate::error::{AigcError, Result};
use crate::llm::provider::utils::mask_api_key;
use crate::ui;

/// 执行 config 命令
///
/// Without flags the current configuration is printed. With any flag the
/// overrides are validated, applied and persisted.
pub fn run(args: &ConfigArgs, store: &ConfigStore, config: AppConfig, colored: bool) -> Result<()> {
    if !args.has_changes() {
        print!("{}", render_config(&config, store.path()));
        return Ok(());
    }

    let updated = apply_overrides(config, args)?;
    store.save(&updated)?;

    ui::success(
        &format!("Configuration saved to {}", store.path().display()),
        colored,
    );
    if updated.provider == ProviderKind::Custom.to_string() && updated.endpoint.is_none() {
        ui::warning(
            "The custom provider needs an endpoint: aigc config --endpoint <URL>",
            colored,
        );
    }
    print!("{}", render_config(&updated, store.path()));
    Ok(())
}

/// Applies the given flags on top of `config`
///
/// The provider name is normalized to its lowercase form; `--endpoint ""`
/// clears the endpoint; `--clear-rules` runs before new `--rule` values are
/// appended.
pub fn apply_overrides(mut config: AppConfig, args: &ConfigArgs) -> Result<AppConfig> {
    if let Some(provider) = &args.provider {
        let kind: ProviderKind = provider.parse()?;
        config.provider = kind.to_string();
    }

    if let Some(model) = &args.model {
        let model = model.trim();
        if model.is_empty() {
            return Err(AigcError::InvalidInput("model cannot be empty".to_string()));
        }
        config.model = model.to_string();
    }

    if let Some(api_key) = &args.api_key {
        config.api_key = api_key.trim().to_string();
    }

    if let Some(endpoint) = &args.endpoint {
        let endpoint = endpoint.trim();
        config.endpoint = if endpoint.is_empty() {
            None
        } else {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(AigcError::InvalidInput(format!(
                    "endpoint must start with http:// or https://: {}",
                    endpoint
                )));
            }
            Some(endpoint.to_string())
        };
    }

    if let Some(debug) = args.debug {
        config.debug = debug;
    }

    if args.clear_rules {
        config.rules.clear();
    }
    config.rules.extend(
        args.rules
            .iter()
            .map(|rule| rule.trim())
            .filter(|rule| !rule.is_empty())
            .map(String::from),
    );

    Ok(config)
}

/// Human-readable configuration with the API key masked
pub fn render_config(config: &AppConfig, path: &Path) -> String {
    let api_key = if config.api_key.is_empty() {
        "(not set)".to_string()
    } else {
        mask_api_key(&config.api_key)
    };

    let mut out = String::new();
    let _ = writeln!(out, "Configuration ({}):", path.display());
    let _ = writeln!(out, "  provider: {}", config.provider);
    let _ = writeln!(out, "  model:    {}", config.model);
    let _ = writeln!(out, "  api_key:  {}", api_key);
    let _ = writeln!(
        out,
        "  endpoint: {}",
        config.endpoint.as_deref().unwrap_or("(default)")
    );
    let _ = writeln!(out, "  debug:    {}", config.debug);
    if config.rules.is_empty() {
        let _ = writeln!(out, "  rules:    (none)");
    } else {
        let _ = writeln!(out, "  rules:");
        for rule in &config.rules {
            let _ = writeln!(out, "    - {}", rule);
        }
    }
    out
}
