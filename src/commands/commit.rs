use std::path::Path;

use crate::commands::options::CommitOptions;
use crate::config::{AppConfig, NetworkConfig, load_local_rules};
use crate::error::Result;
use crate::git::{GitOperations, repository::GitRepository};
use crate::llm::{LLMProvider, provider::create_provider};
use crate::ui;

/// 执行 commit 命令
///
/// Validates the provider before touching the repository, then runs the
/// stage -> generate -> commit -> push flow in the current directory.
///
/// # Arguments
/// * `options` - commit options built from the CLI
/// * `config` - loaded configuration
/// * `workdir` - directory holding the optional `.aigcrules` file
pub async fn run(options: &CommitOptions<'_>, config: &AppConfig, workdir: &Path) -> Result<()> {
    let rules = merge_rules(&config.rules, workdir, options.colored);

    let provider_config = config.provider_config(options.model_override);
    tracing::debug!("Provider config: {:?}", provider_config);
    let provider = create_provider(&provider_config, &NetworkConfig::default())?;

    let repo = GitRepository::new();

    run_with_deps(options, &rules, &repo, provider.as_ref()).await?;
    Ok(())
}

/// Configured rules followed by the rules of the local `.aigcrules` file
///
/// A local file that cannot be read is reported and skipped.
fn merge_rules(configured: &[String], workdir: &Path, colored: bool) -> Vec<String> {
    let mut rules = configured.to_vec();

    match load_local_rules(workdir) {
        Ok(local) => {
            if !local.is_empty() {
                tracing::debug!("Loaded {} local rule(s)", local.len());
            }
            rules.extend(local);
        }
        Err(e) => {
            tracing::warn!("Failed to load local rules: {}", e);
            ui::warning(&format!("Ignoring local rules: {}", e), colored);
        }
    }

    rules
}

/// 执行 commit 流程（可测试版本，接受 trait 对象）
///
/// Any failure stops the remaining steps; nothing is rolled back, so
/// changes stay staged when generation or the commit fails.
///
/// Returns the committed message.
pub async fn run_with_deps(
    options: &CommitOptions<'_>,
    rules: &[String],
    repo: &dyn GitOperations,
    provider: &dyn LLMProvider,
) -> Result<String> {
    let colored = options.colored;

    // 1. stage + change summary
    ui::step("1/3", "Staging changes...", colored);
    let changes = repo.stage_and_diff()?;
    tracing::debug!(content = %changes, "Staged changes");
    if let Some(hint) = options.hint {
        tracing::debug!(content = %hint, "User hint");
    }

    // 2. generate
    tracing::info!(provider = provider.name(), model = provider.model(), "Requesting commit message");
    ui::step(
        "2/3",
        &format!("Generating commit message with {}...", provider.name()),
        colored,
    );
    let spinner = if options.show_spinner() {
        ui::Spinner::new("Waiting for the provider...")
    } else {
        ui::Spinner::hidden()
    };
    let generated = provider
        .generate_commit_message(&changes, options.hint, rules)
        .await;
    spinner.finish_and_clear();
    let message = generated?;

    // 3. commit
    ui::step("3/3", "Creating commit...", colored);
    repo.commit(&message)?;
    tracing::info!(content = %message, "Committed changes");

    println!("\n{}", ui::format_commit_message(&message, colored));

    if options.push {
        println!("{}", ui::info("Pushing changes...", colored));
        repo.push()?;
        tracing::info!("Pushed changes");
        ui::success("Successfully pushed changes", colored);
    }

    Ok(message)
}
