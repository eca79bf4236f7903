use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqBotError {
    #[error("Malformed catalog entry at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Vector space has {vectors} vectors but catalog has {entries} entries")]
    VectorSpaceMismatch { vectors: usize, entries: usize },

    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Custom(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FaqBotError>;
