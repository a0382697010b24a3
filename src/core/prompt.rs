/// Builds the fixed instruction template for one generation round trip.
/// Best-effort only: the upstream model is not bound to honor the requested
/// count, levels, or output format.
pub fn build_prompt(level: &str, num_words: usize) -> String {
    format!(
        "Generate a list of {num_words} English vocabulary words with KK Phonetic Symbol, \
         with their English definition, and with one example sentence each, \
         suitable for {level} level. \
         Format the output as a pure JSON array of objects. \
         Please include at least 3 words in level B2 or C1. \
         Each object should have 'word', 'pronunciation', 'definition', and 'sentence' keys. \
         Please consider at least 1 word from Lenny's Podcast's transcript and sentences, \
         so it's more tech related. \
         Do not include any extra text, explanation, or code block. \
         Only output the JSON array."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_both_parameters() {
        let prompt = build_prompt("B1-C1", 10);
        assert!(prompt.contains("10 English vocabulary words"));
        assert!(prompt.contains("suitable for B1-C1 level"));
    }

    #[test]
    fn prompt_requests_the_four_keys_and_no_fences() {
        let prompt = build_prompt("A2", 6);
        for key in ["'word'", "'pronunciation'", "'definition'", "'sentence'"] {
            assert!(prompt.contains(key), "missing key request: {}", key);
        }
        assert!(prompt.contains("Only output the JSON array."));
        assert!(prompt.contains("Lenny's Podcast"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(build_prompt("B2", 12), build_prompt("B2", 12));
    }
}
