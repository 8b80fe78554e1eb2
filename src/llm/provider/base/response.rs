//! Response handling
//!
//! Turns raw provider text into a commit message and shortens bodies
//! quoted in error messages

use crate::constants::ui::ERROR_PREVIEW_LENGTH;
use crate::error::{AigcError, Result};

/// Shortens `s` to at most [`ERROR_PREVIEW_LENGTH`] bytes plus `...`
///
/// Cuts on a char boundary, so CJK bodies never split a character.
pub fn truncate_for_preview(s: &str) -> String {
    if s.len() <= ERROR_PREVIEW_LENGTH {
        return s.to_string();
    }
    let mut end = ERROR_PREVIEW_LENGTH;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Strips a markdown fence wrapped around the whole message
///
/// Models occasionally answer with
/// ````text
/// ```text
/// feat(auth): add login
/// ```
/// ````
/// The opening line may carry a short language tag; an unterminated fence
/// is left untouched.
pub fn clean_commit_response(response: &str) -> String {
    let trimmed = response.trim();
    strip_fence(trimmed).unwrap_or(trimmed).trim().to_string()
}

fn strip_fence(text: &str) -> Option<&str> {
    let body = text.strip_prefix("```")?.strip_suffix("```")?;
    match body.split_once('\n') {
        Some((tag, rest)) if is_fence_tag(tag) => Some(rest),
        Some(_) => Some(body),
        None if is_fence_tag(body) => Some(""),
        None => Some(body),
    }
}

fn is_fence_tag(tag: &str) -> bool {
    let tag = tag.trim();
    tag.len() <= 20 && !tag.contains(char::is_whitespace) && !tag.contains(':')
}

/// Turns the provider's text into the final commit message
///
/// `None` (no choices / no text block) and blank text both become
/// [`AigcError::NoMessageGenerated`].
pub fn process_commit_response(response: Option<String>) -> Result<String> {
    let cleaned = response
        .as_deref()
        .map(clean_commit_response)
        .unwrap_or_default();

    if cleaned.is_empty() {
        return Err(AigcError::NoMessageGenerated);
    }

    Ok(cleaned)
}
