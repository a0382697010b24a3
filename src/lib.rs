pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use adapters::gemini::GeminiClient;
pub use config::CliConfig;
pub use core::engine::{VocabEngine, GENERATION_FAILED};
pub use domain::model::{GenerationRequest, VocabularyEntry};
pub use utils::error::{Result, VocabError};
