use crate::domain::model::ProviderResponse;
use crate::utils::error::{Result, VocabError};

/// Pulls the textual payload out of a provider response: the flat text field
/// when present and non-empty, otherwise the first candidate's first part.
pub fn extract_text(response: &ProviderResponse) -> Result<String> {
    match response {
        ProviderResponse::Text { text } if !text.trim().is_empty() => Ok(text.clone()),
        ProviderResponse::Text { .. } => Err(VocabError::UnexpectedResponseFormat),
        ProviderResponse::Candidates { candidates } => candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .and_then(|part| part.text.clone())
            .ok_or(VocabError::UnexpectedResponseFormat),
    }
}

/// Removes a surrounding triple-backtick fence, including an optional
/// language tag on the fence line. Non-fenced input passes through trimmed.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };

    // Drop a language tag sharing the opening fence line (e.g. ```json).
    let body = match rest.split_once('\n') {
        Some((tag, body)) if tag.trim().is_empty() || tag.trim().eq_ignore_ascii_case("json") => {
            body
        }
        _ => rest,
    };

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim().to_string()
}
