use thiserror::Error;

/// Failures at the JSON boundary. The engine itself never fails.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GameError {
    /// Whether the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        match self {
            GameError::InvalidRequest(_) => true,
            GameError::UnsupportedSchema { .. } => true,
            GameError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
