use crate::domain::model::ProviderResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn model(&self) -> &str;
}

/// Outbound boundary to the generative-language API: one prompt in, one raw
/// provider response out. No retries, no streaming, no multi-turn state.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse>;
}
