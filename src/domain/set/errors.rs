//! Set-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, GameId, SetId};

/// Errors returned by set command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// Set was not found.
    NotFound(SetId),
    /// Owning game was not found.
    GameNotFound(GameId),
    /// Action code is not part of the vocabulary.
    InvalidActionCode(String),
    /// Set is closed and cannot change.
    AlreadyFinished,
    /// Set was already folded into its game.
    AlreadyRecorded,
    /// Game already has a winner or was closed.
    GameAlreadyFinished,
    /// Stored state advanced since it was read; reload and retry.
    StaleWrite,
    /// Invalid state for operation.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SetError {
    pub fn not_found(id: SetId) -> Self {
        SetError::NotFound(id)
    }
    pub fn game_not_found(id: GameId) -> Self {
        SetError::GameNotFound(id)
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        SetError::InvalidState(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SetError::NotFound(_) => ErrorCode::SetNotFound,
            SetError::GameNotFound(_) => ErrorCode::GameNotFound,
            SetError::InvalidActionCode(_) => ErrorCode::InvalidActionCode,
            SetError::AlreadyFinished => ErrorCode::SetAlreadyFinished,
            SetError::AlreadyRecorded => ErrorCode::SetAlreadyRecorded,
            SetError::GameAlreadyFinished => ErrorCode::GameAlreadyFinished,
            SetError::StaleWrite => ErrorCode::ConcurrencyConflict,
            SetError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SetError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SetError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SetError::NotFound(id) => format!("Set not found: {}", id),
            SetError::GameNotFound(id) => format!("Game not found: {}", id),
            SetError::InvalidActionCode(code) => format!("Invalid action code: '{}'", code),
            SetError::AlreadyFinished => "Set is already finished".to_string(),
            SetError::AlreadyRecorded => "Set was already recorded for this game".to_string(),
            SetError::GameAlreadyFinished => "Game is already finished".to_string(),
            SetError::StaleWrite => {
                "Set was modified by another request; reload and retry".to_string()
            }
            SetError::InvalidState(msg) => format!("Invalid state: {}", msg),
            SetError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SetError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SetError {}

impl From<DomainError> for SetError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SetNotFound => match err.detail("set_id").and_then(|s| s.parse().ok()) {
                Some(id) => SetError::NotFound(id),
                None => SetError::Infrastructure(err.to_string()),
            },
            ErrorCode::GameNotFound => match err.detail("game_id").and_then(|s| s.parse().ok()) {
                Some(id) => SetError::GameNotFound(id),
                None => SetError::Infrastructure(err.to_string()),
            },
            ErrorCode::InvalidActionCode => {
                SetError::InvalidActionCode(err.detail("code").unwrap_or_default().to_string())
            }
            ErrorCode::SetAlreadyFinished => SetError::AlreadyFinished,
            ErrorCode::SetAlreadyRecorded => SetError::AlreadyRecorded,
            ErrorCode::GameAlreadyFinished => SetError::GameAlreadyFinished,
            ErrorCode::ConcurrencyConflict => SetError::StaleWrite,
            ErrorCode::InvalidStateTransition => SetError::InvalidState(err.message),
            ErrorCode::ValidationFailed => SetError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => SetError::Infrastructure(err.to_string()),
        }
    }
}
