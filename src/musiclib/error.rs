use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusicLibError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Search terms cannot be empty.")]
    EmptyQuery,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MusicLibError>;
