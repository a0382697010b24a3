use crate::core::ConfigProvider;
use crate::domain::model::GenerationRequest;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_socket_addr, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lexigen")]
#[command(about = "Generate random English vocabulary words with a generative-language API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = "B1-C1", help = "Proficiency level embedded in the prompt")]
    pub level: String,

    #[arg(long, default_value = "10", help = "Word count requested from the API")]
    pub num_words: usize,

    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn generation_request(&self) -> GenerationRequest {
        GenerationRequest {
            level: self.level.clone(),
            num_words: self.num_words,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("model", &self.model)?;
        validate_non_empty_string("level", &self.level)?;
        validate_range("num_words", self.num_words, 1, 20)?;
        validate_socket_addr("bind", &self.bind)?;
        Ok(())
    }
}
