//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the volleyball statistics domain.

mod effectiveness;
mod errors;
mod ids;
mod side;
mod timestamp;

pub use effectiveness::Effectiveness;
pub use errors::{DomainError, ErrorCode};
pub use ids::{GameId, SetId};
pub use side::Side;
pub use timestamp::Timestamp;
