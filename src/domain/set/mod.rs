//! Set domain module.
//!
//! Handles the lifecycle of a single set: creation, action accumulation
//! and closing once a side satisfies the win condition.

mod aggregate;
mod errors;
mod win_condition;

pub use aggregate::Set;
pub use errors::SetError;
pub use win_condition::{MatchRules, SetOutcome, WinCondition, WinConditionParams};
