//! Error types for adkiln

use thiserror::Error;

/// The main error type for adkiln operations
#[derive(Debug, Error)]
pub enum KilnError {
    #[error("Invalid brief: {0}")]
    Brief(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Variant count must be at least 1, got {0}")]
    InvalidVariantCount(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for adkiln operations
pub type Result<T> = std::result::Result<T, KilnError>;

impl From<toml::de::Error> for KilnError {
    fn from(err: toml::de::Error) -> Self {
        KilnError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for KilnError {
    fn from(err: toml::ser::Error) -> Self {
        KilnError::Parse(err.to_string())
    }
}
