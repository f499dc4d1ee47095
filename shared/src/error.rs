use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
}

impl SharedError {
    /// Wraps a URL parse failure, naming the field whose value was bad.
    pub fn invalid_url(field: &str, value: &str, error: url::ParseError) -> Self {
        Self::InvalidUrl(format!("{} = {:?}: {}", field, value, error))
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
