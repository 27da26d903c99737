//! Game-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, GameId};

/// Errors returned by game command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Game was not found.
    NotFound(GameId),
    /// Game already has a winner or was closed.
    AlreadyFinished,
    /// Stored state advanced since it was read; reload and retry.
    StaleWrite,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl GameError {
    pub fn not_found(id: GameId) -> Self {
        GameError::NotFound(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::NotFound(_) => ErrorCode::GameNotFound,
            GameError::AlreadyFinished => ErrorCode::GameAlreadyFinished,
            GameError::StaleWrite => ErrorCode::ConcurrencyConflict,
            GameError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GameError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            GameError::NotFound(id) => format!("Game not found: {}", id),
            GameError::AlreadyFinished => "Game is already finished".to_string(),
            GameError::StaleWrite => {
                "Game was modified by another request; reload and retry".to_string()
            }
            GameError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            GameError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GameError {}

impl From<DomainError> for GameError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::GameNotFound => match err.detail("game_id").and_then(|s| s.parse().ok()) {
                Some(id) => GameError::NotFound(id),
                None => GameError::Infrastructure(err.to_string()),
            },
            ErrorCode::GameAlreadyFinished => GameError::AlreadyFinished,
            ErrorCode::ConcurrencyConflict => GameError::StaleWrite,
            ErrorCode::ValidationFailed => GameError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => GameError::Infrastructure(err.to_string()),
        }
    }
}
