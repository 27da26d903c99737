//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, ratios, errors)
//! - `statistics` - Action vocabulary and counter accumulation
//! - `set` - Set aggregate and win conditions
//! - `game` - Game aggregate, set tally and game-level totals

pub mod foundation;
pub mod game;
pub mod set;
pub mod statistics;
