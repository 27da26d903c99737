//! Application layer - Commands, Queries, and Handlers.
//!
//! Every write handler follows the same bracket: load the aggregate, run the
//! pure domain operation, then persist with a compare-and-swap on the
//! `last_update` observed at load time.

pub mod handlers;

pub use handlers::{
    // Game handlers
    CreateGameCommand, CreateGameHandler, CreateGameResult,
    FinishGameCommand, FinishGameHandler, FinishGameResult,
    GetGameHandler, GetGameQuery,
    GetGameStatisticsHandler, GetGameStatisticsQuery,
    // Set handlers
    ApplyActionCommand, ApplyActionHandler, ApplyActionResult,
    CreateSetCommand, CreateSetHandler, CreateSetResult,
    FinishSetCommand, FinishSetHandler, FinishSetResult,
    GetSetHandler, GetSetQuery,
};
