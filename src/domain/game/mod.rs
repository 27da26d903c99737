//! Game domain module.
//!
//! Tracks a best-of-N match: starting sets, folding finished sets into the
//! set tally and deciding the match winner.

mod aggregate;
mod errors;
mod statistics;

pub use aggregate::{Game, MAX_BEST_OF};
pub use errors::GameError;
pub use statistics::GameStatistics;
