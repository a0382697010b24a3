use serde::{Deserialize, Serialize};

/// One vocabulary record as returned by the upstream model. Every field may be
/// absent; missing fields render as "N/A". Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub sentence: Option<String>,
}

/// Prompt-construction parameters for one generation round trip. The upstream
/// API is not bound to honor them; the returned count and levels are not
/// validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub level: String,
    pub num_words: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            level: "B1-C1".to_string(),
            num_words: 10,
        }
    }
}

/// Raw body of one generateContent response. The API answers with either a
/// flat text field or a candidate/part structure; serde picks the variant
/// whose fields are present.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProviderResponse {
    Text { text: String },
    Candidates { candidates: Vec<Candidate> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_with_missing_keys() {
        let entry: VocabularyEntry = serde_json::from_str(r#"{"word": "poignant"}"#).unwrap();
        assert_eq!(entry.word.as_deref(), Some("poignant"));
        assert!(entry.pronunciation.is_none());
        assert!(entry.definition.is_none());
        assert!(entry.sentence.is_none());
    }

    #[test]
    fn entry_ignores_unknown_keys() {
        let entry: VocabularyEntry =
            serde_json::from_str(r#"{"word": "poignant", "level": "C1"}"#).unwrap();
        assert_eq!(entry.word.as_deref(), Some("poignant"));
    }

    #[test]
    fn provider_response_picks_flat_text_shape() {
        let response: ProviderResponse =
            serde_json::from_str(r#"{"text": "[]"}"#).unwrap();
        assert!(matches!(response, ProviderResponse::Text { .. }));
    }

    #[test]
    fn provider_response_picks_candidate_shape() {
        let response: ProviderResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "[]"}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(response, ProviderResponse::Candidates { .. }));
    }
}
