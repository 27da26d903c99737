//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use super::{GameId, SetId};

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidActionCode,

    // Not found errors
    SetNotFound,
    GameNotFound,

    // State errors
    InvalidStateTransition,
    SetAlreadyFinished,
    SetAlreadyRecorded,
    GameAlreadyFinished,

    // Concurrency errors
    ConcurrencyConflict,

    // Infrastructure errors
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidActionCode => "INVALID_ACTION_CODE",
            ErrorCode::SetNotFound => "SET_NOT_FOUND",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::SetAlreadyFinished => "SET_ALREADY_FINISHED",
            ErrorCode::SetAlreadyRecorded => "SET_ALREADY_RECORDED",
            ErrorCode::GameAlreadyFinished => "GAME_ALREADY_FINISHED",
            ErrorCode::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a database error wrapping an adapter failure.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Creates a not-found error for a set, carrying its ID.
    pub fn set_not_found(id: &SetId) -> Self {
        Self::new(ErrorCode::SetNotFound, format!("Set not found: {}", id))
            .with_detail("set_id", id.to_string())
    }

    /// Creates a not-found error for a game, carrying its ID.
    pub fn game_not_found(id: &GameId) -> Self {
        Self::new(ErrorCode::GameNotFound, format!("Game not found: {}", id))
            .with_detail("game_id", id.to_string())
    }

    /// Creates a compare-and-swap failure for an aggregate modified since it was read.
    pub fn stale_write(aggregate: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ConcurrencyConflict,
            format!("{} {} was modified by another request", aggregate, id),
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns a detail value by key.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SetNotFound, "Set not found");
        assert_eq!(format!("{}", err), "[SET_NOT_FOUND] Set not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::InvalidActionCode, "Unknown action")
            .with_detail("code", "ATK_MAYBE");

        assert_eq!(err.detail("code"), Some("ATK_MAYBE"));
        assert_eq!(err.detail("missing"), None);
    }

    #[test]
    fn validation_error_records_field() {
        let err = DomainError::validation("best_of", "must be odd");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some("best_of"));
    }

    #[test]
    fn database_error_includes_context() {
        let err = DomainError::database("Failed to insert set", "connection reset");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Failed to insert set: connection reset");
    }

    #[test]
    fn not_found_errors_carry_ids() {
        let set_id = SetId::new();
        let game_id = GameId::new();
        let expected = set_id.to_string();
        assert_eq!(
            DomainError::set_not_found(&set_id).detail("set_id"),
            Some(expected.as_str())
        );
        assert_eq!(DomainError::game_not_found(&game_id).code, ErrorCode::GameNotFound);
    }

    #[test]
    fn stale_write_is_concurrency_conflict() {
        let err = DomainError::stale_write("Set", "abc");
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        assert_eq!(err.message, "Set abc was modified by another request");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ConcurrencyConflict), "CONCURRENCY_CONFLICT");
        assert_eq!(format!("{}", ErrorCode::SetAlreadyRecorded), "SET_ALREADY_RECORDED");
    }
}
