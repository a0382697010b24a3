pub mod engine;
pub mod format;
pub mod parse;
pub mod prompt;
pub mod response;
pub mod select;

pub use crate::domain::model::{GenerationRequest, ProviderResponse, VocabularyEntry};
pub use crate::domain::ports::{ConfigProvider, TextGenerator};
pub use crate::utils::error::Result;
