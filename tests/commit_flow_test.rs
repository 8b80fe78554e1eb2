//! commit 流程端到端测试
//!
//! Real provider implementations against a mockito server, git replaced by
//! `MockGitOperations`:
//! - successful generation is committed verbatim
//! - zero choices aborts before committing
//! - no staged changes never reaches the provider
//! - push runs only with `--push`

use aigc::commands::CommitOptions;
use aigc::commands::commit::run_with_deps;
use aigc::config::{AppConfig, NetworkConfig};
use aigc::error::AigcError;
use aigc::git::MockGitOperations;
use aigc::llm::provider::create_provider;
use aigc::llm::provider::test_utils::ensure_crypto_provider;
use mockall::predicate::eq;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;

fn custom_config(endpoint: String) -> AppConfig {
    AppConfig {
        provider: "custom".to_string(),
        model: "test-model".to_string(),
        api_key: "sk-test-123456".to_string(),
        endpoint: Some(endpoint),
        ..Default::default()
    }
}

fn options(push: bool) -> CommitOptions<'static> {
    CommitOptions {
        push,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_generated_message_is_committed() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test-123456")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "model": "test-model",
                "stream": false
            })),
            Matcher::Regex(r"M\\tREADME\.md".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"docs: update README"}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let config = custom_config(server.url());
    let provider = create_provider(&config.provider_config(None), &NetworkConfig::default()).unwrap();

    let mut git = MockGitOperations::new();
    git.expect_stage_and_diff()
        .times(1)
        .returning(|| Ok("M\tREADME.md\n".to_string()));
    git.expect_commit()
        .with(eq("docs: update README"))
        .times(1)
        .returning(|_| Ok(()));
    git.expect_push().times(0);

    let message = run_with_deps(&options(false), &config.rules, &git, provider.as_ref())
        .await
        .unwrap();

    assert_eq!(message, "docs: update README");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_zero_choices_does_not_commit() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let config = custom_config(server.url());
    let provider = create_provider(&config.provider_config(None), &NetworkConfig::default()).unwrap();

    let mut git = MockGitOperations::new();
    git.expect_stage_and_diff()
        .returning(|| Ok("M\tREADME.md\n".to_string()));
    git.expect_commit().times(0);
    git.expect_push().times(0);

    let err = run_with_deps(&options(true), &[], &git, provider.as_ref())
        .await
        .unwrap_err();

    assert!(matches!(err, AigcError::NoMessageGenerated));
    assert_eq!(err.to_string(), "no commit message generated");
}

#[tokio::test]
async fn test_no_staged_changes_skips_request() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let config = custom_config(server.url());
    let provider = create_provider(&config.provider_config(None), &NetworkConfig::default()).unwrap();

    let mut git = MockGitOperations::new();
    git.expect_stage_and_diff()
        .returning(|| Err(AigcError::NoStagedChanges));
    git.expect_commit().times(0);

    let err = run_with_deps(&options(false), &[], &git, provider.as_ref())
        .await
        .unwrap_err();

    assert!(matches!(err, AigcError::NoStagedChanges));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_push_after_commit() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "sk-ant-123456")
        .with_status(200)
        .with_body(r#"{"content":[{"type":"text","text":"feat(cli): add push flag"}]}"#)
        .create_async()
        .await;

    let config = AppConfig {
        provider: "anthropic".to_string(),
        api_key: "sk-ant-123456".to_string(),
        endpoint: Some(server.url()),
        ..Default::default()
    };
    let provider = create_provider(
        &config.provider_config(Some("claude-3-haiku")),
        &NetworkConfig::default(),
    )
    .unwrap();
    assert_eq!(provider.model(), "claude-3-haiku");

    let mut seq = mockall::Sequence::new();
    let mut git = MockGitOperations::new();
    git.expect_stage_and_diff()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok("A\tsrc/cli.rs".to_string()));
    git.expect_commit()
        .with(eq("feat(cli): add push flag"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    git.expect_push()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    run_with_deps(&options(true), &[], &git, provider.as_ref())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_api_error_surfaces_status() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let config = custom_config(server.url());
    let provider = create_provider(&config.provider_config(None), &NetworkConfig::default()).unwrap();

    let mut git = MockGitOperations::new();
    git.expect_stage_and_diff()
        .returning(|| Ok("D\told.txt".to_string()));
    git.expect_commit().times(0);

    let err = run_with_deps(&options(false), &[], &git, provider.as_ref())
        .await
        .unwrap_err();

    assert!(matches!(err, AigcError::LlmApi { status: 429, .. }));
    assert!(err.suggestion().unwrap().contains("Rate limit"));
}
