use crate::llm::message::ChatMessage;

/// Conventional Commits directives shared by every request
const COMMIT_SYSTEM_PROMPT: &str = r#"Generate a commit message following the Conventional Commits standard:

<type>[optional scope]: <description>

[optional body]

[optional footer]

Rules:
1. Type MUST be one of:
   - feat: new feature (correlates with MINOR version)
   - fix: bug fix (correlates with PATCH version)
   - docs: documentation changes
   - style: formatting, missing semi colons, etc
   - refactor: refactoring code
   - perf: performance improvements
   - test: adding tests
   - chore: maintenance tasks

2. Scope is optional and should describe the section of code (e.g., feat(parser))
3. Description must be concise and in imperative mood (e.g., 'change' not 'changed')
4. Body should explain the motivation for the change and contrast with previous behavior
5. Breaking changes MUST be indicated by BREAKING CHANGE: in footer
6. A ! MAY be added before the : for breaking changes (e.g., feat!: breaking change)
"#;

/// Closing instruction of the system message
const COMMIT_SYSTEM_OUTPUT: &str = "IMPORTANT: Always generate the commit message in English, regardless of the input language.\n\
Do not include any explanation in your response, only return the commit message content.";

/// Wraps the user's hint; `{hint}` is replaced
const HINT_TEMPLATE: &str = r#"User provided this commit message hint (which may be in any language):
{hint}

Please consider this message when generating the commit message.
Understand the meaning and translate the intent to English if needed,
but ensure the output follows the Conventional Commits standard and is in English."#;

/// Wraps `git diff --cached --name-status`; `{changes}` is replaced
const CHANGES_TEMPLATE: &str = r#"Analyze these file changes and generate a commit message:
"""
{changes}
"""

Guidelines:
1. Use appropriate type based on the changes (feat for new features, fix for bugs, etc.)
2. Add relevant scope if the changes are focused on a specific component
3. Use imperative mood in the description
4. Description must be under 100 characters
5. Include breaking changes in footer with BREAKING CHANGE: prefix if any
6. Add detailed body explaining motivation and changes if significant
7. Use issue/PR references in footer if relevant

Return only the commit message without any extra content or backticks."#;

/// Builds the message list for commit message generation
///
/// Order is fixed: system message, hint message (only for a non-blank
/// `hint`), then the change summary.
///
/// # Example
/// ```
/// use aigc::llm::message::Role;
/// use aigc::llm::prompt::build_commit_messages;
///
/// let messages = build_commit_messages("M\tREADME.md", None, &[]);
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].role, Role::System);
/// assert!(messages[1].content.contains("M\tREADME.md"));
/// ```
pub fn build_commit_messages(
    changes: &str,
    hint: Option<&str>,
    rules: &[String],
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(build_system_prompt(rules))];

    if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
        messages.push(ChatMessage::user(HINT_TEMPLATE.replace("{hint}", hint)));
    }

    messages.push(ChatMessage::user(
        CHANGES_TEMPLATE.replace("{changes}", changes.trim_end()),
    ));

    messages
}

/// System prompt with optional project rules, one bullet per rule
fn build_system_prompt(rules: &[String]) -> String {
    let mut prompt = String::from(COMMIT_SYSTEM_PROMPT);

    let rules: Vec<&str> = rules
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();

    if !rules.is_empty() {
        prompt.push_str("\nProject-specific rules:\n");
        for rule in rules {
            prompt.push_str(&format!("- {}\n", rule));
        }
    }

    prompt.push('\n');
    prompt.push_str(COMMIT_SYSTEM_OUTPUT);
    prompt
}
