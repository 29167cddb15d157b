use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No rank known for index {rank}")]
    RankLookupError { rank: i64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    RenderError(String),
}
