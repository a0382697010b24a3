use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    ApiStatusError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected response format from the generative API")]
    UnexpectedResponseFormat,

    #[error("Generative client is not configured")]
    ClientUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, VocabError>;
