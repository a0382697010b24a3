use crate::core::format::format_html;
use crate::core::parse::parse_vocabulary;
use crate::core::prompt::build_prompt;
use crate::core::response::{extract_text, strip_code_fence};
use crate::core::select::select_entries;
use crate::domain::model::{GenerationRequest, VocabularyEntry};
use crate::domain::ports::TextGenerator;

/// Shown whenever a generation attempt produces no usable vocabulary,
/// whatever the underlying cause.
pub const GENERATION_FAILED: &str =
    "Error: Could not generate vocabulary. Please check API configuration and try again.";

/// Runs the generate → select → format pipeline. One instance lives for the
/// whole process; each run is independent and keeps no state.
pub struct VocabEngine<G: TextGenerator> {
    generator: G,
    request: GenerationRequest,
}

impl<G: TextGenerator> VocabEngine<G> {
    pub fn new(generator: G, request: GenerationRequest) -> Self {
        Self { generator, request }
    }

    /// One API round trip. Transport, shape, and parse failures all collapse
    /// to an empty list; the distinction survives only in the logs.
    pub async fn generate_vocabulary(&self) -> Vec<VocabularyEntry> {
        let prompt = build_prompt(&self.request.level, self.request.num_words);

        let response = match self.generator.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Vocabulary generation failed: {}", e);
                return Vec::new();
            }
        };

        let text = match extract_text(&response) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Could not extract response text: {}", e);
                return Vec::new();
            }
        };

        parse_vocabulary(&strip_code_fence(&text))
    }

    /// The full action behind the UI button. Infallible by design: every
    /// failure mode becomes the generic failure string.
    pub async fn run(&self) -> String {
        let vocabulary = self.generate_vocabulary().await;
        if vocabulary.is_empty() {
            tracing::warn!("Vocabulary list is empty or generation failed");
            return GENERATION_FAILED.to_string();
        }

        let selected = select_entries(&vocabulary, &mut rand::thread_rng());
        tracing::info!(
            "Selected {} of {} generated words",
            selected.len(),
            vocabulary.len()
        );
        format_html(&selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProviderResponse;
    use crate::utils::error::{Result, VocabError};
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<ProviderResponse> {
            Ok(ProviderResponse::Text {
                text: self.0.to_string(),
            })
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<ProviderResponse> {
            Err(VocabError::ClientUnavailable)
        }
    }

    fn engine<G: TextGenerator>(generator: G) -> VocabEngine<G> {
        VocabEngine::new(generator, GenerationRequest::default())
    }

    #[tokio::test]
    async fn empty_array_yields_the_failure_string() {
        let output = engine(FixedGenerator("[]")).run().await;
        assert_eq!(output, GENERATION_FAILED);
    }

    #[tokio::test]
    async fn malformed_response_yields_the_failure_string() {
        let output = engine(FixedGenerator("I refuse to answer in JSON.")).run().await;
        assert_eq!(output, GENERATION_FAILED);
    }

    #[tokio::test]
    async fn generator_error_yields_the_failure_string() {
        let output = engine(FailingGenerator).run().await;
        assert_eq!(output, GENERATION_FAILED);
    }

    #[tokio::test]
    async fn fenced_response_is_rendered_as_html() {
        let text = "```json\n[{\"word\":\"ubiquitous\",\"pronunciation\":\"/juːˈbɪkwɪtəs/\",\"definition\":\"present everywhere\",\"sentence\":\"Smartphones are ubiquitous.\"}]\n```";
        let output = engine(FixedGenerator(text)).run().await;

        assert!(output.contains("<b>Word</b>: ubiquitous<br>"));
        assert!(output.contains("<b>Sentence</b>: Smartphones are ubiquitous.<br>"));
    }

    #[tokio::test]
    async fn short_list_is_rendered_in_full() {
        let output =
            engine(FixedGenerator("[{\"word\":\"alpha\"},{\"word\":\"beta\"}]")).run().await;

        assert!(output.contains("<b>Word</b>: alpha<br>"));
        assert!(output.contains("<b>Word</b>: beta<br>"));
        assert!(output.contains("<b>Definition</b>: N/A<br>"));
    }
}
