//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod game;
pub mod set;

pub use game::{
    CreateGameCommand, CreateGameHandler, CreateGameResult, FinishGameCommand, FinishGameHandler,
    FinishGameResult, GetGameHandler, GetGameQuery, GetGameStatisticsHandler,
    GetGameStatisticsQuery,
};
pub use set::{
    ApplyActionCommand, ApplyActionHandler, ApplyActionResult, CreateSetCommand, CreateSetHandler,
    CreateSetResult, FinishSetCommand, FinishSetHandler, FinishSetResult, GetSetHandler,
    GetSetQuery,
};
