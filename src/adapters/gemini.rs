use crate::domain::model::ProviderResponse;
use crate::domain::ports::{ConfigProvider, TextGenerator};
use crate::utils::error::{Result, VocabError};
use async_trait::async_trait;
use reqwest::Client;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const API_KEY_FALLBACK_ENV: &str = "GOOGLE_API_KEY";

/// Client for the generateContent endpoint, bound to one model name.
///
/// `Disabled` is the degraded mode entered when no API key is present at
/// startup; it stays disabled for the lifetime of the process and every
/// generation attempt fails without touching the network.
pub enum GeminiClient {
    Ready {
        http: Client,
        endpoint: String,
        model: String,
        api_key: String,
    },
    Disabled,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key: Option<String>) -> Self {
        match api_key {
            Some(api_key) => Self::Ready {
                http: Client::new(),
                endpoint: endpoint.trim_end_matches('/').to_string(),
                model: model.to_string(),
                api_key,
            },
            None => Self::Disabled,
        }
    }

    /// Reads the credential from the environment. Absence is logged and
    /// yields a permanently disabled client; there is no retry or re-prompt.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let api_key = read_api_key();
        if api_key.is_none() {
            tracing::warn!(
                "{} (or {}) not set; vocabulary generation is disabled",
                API_KEY_ENV,
                API_KEY_FALLBACK_ENV
            );
        }
        Self::new(config.api_endpoint(), config.model(), api_key)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

fn read_api_key() -> Option<String> {
    [API_KEY_ENV, API_KEY_FALLBACK_ENV]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse> {
        let Self::Ready {
            http,
            endpoint,
            model,
            api_key,
        } = self
        else {
            return Err(VocabError::ClientUnavailable);
        };

        let url = format!("{}/models/{}:generateContent", endpoint, model);
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!("Requesting vocabulary from {}", url);
        let response = http
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VocabError::ApiStatusError { status, body });
        }

        Ok(response.json::<ProviderResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_client_fails_without_network() {
        let client = GeminiClient::new("http://127.0.0.1:1", "gemini-2.5-flash", None);
        assert!(!client.is_available());
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, VocabError::ClientUnavailable));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_endpoint() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-2.5-flash",
            Some("key".to_string()),
        );
        match client {
            GeminiClient::Ready { endpoint, .. } => {
                assert_eq!(endpoint, "https://generativelanguage.googleapis.com/v1beta");
            }
            GeminiClient::Disabled => panic!("expected ready client"),
        }
    }
}
