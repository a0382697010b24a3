use crate::domain::model::VocabularyEntry;

/// Strict JSON-array parse of the extracted text. Any parse failure degrades
/// to an empty list (fail-soft); the cause is only visible in the logs.
pub fn parse_vocabulary(text: &str) -> Vec<VocabularyEntry> {
    match serde_json::from_str::<Vec<VocabularyEntry>>(text) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to parse vocabulary JSON: {}", e);
            Vec::new()
        }
    }
}
