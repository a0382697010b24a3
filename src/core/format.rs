use crate::domain::model::VocabularyEntry;
use std::fmt::Write;

const MISSING_FIELD: &str = "N/A";
const EMPTY_MESSAGE: &str = "No vocabulary selected.";

/// Renders the selected entries as one HTML fragment: four labeled lines per
/// entry in selection order, a blank line between entries. Values are emitted
/// verbatim; missing fields show as "N/A".
pub fn format_html(entries: &[VocabularyEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let _ = write!(out, "<b>Word</b>: {}<br>", field(&entry.word));
        let _ = write!(out, "<b>Pronunciation</b>: {}<br>", field(&entry.pronunciation));
        let _ = write!(out, "<b>Definition</b>: {}<br>", field(&entry.definition));
        let _ = write!(out, "<b>Sentence</b>: {}<br><br>", field(&entry.sentence));
    }
    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_FIELD)
}
