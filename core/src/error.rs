use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] std::io::Error),

    #[error("Invalid token cost {input:?}: not a number")]
    InvalidTokenCost { input: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ArcadeResult<T> = Result<T, ArcadeError>;
