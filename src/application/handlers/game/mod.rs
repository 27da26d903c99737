//! Game command and query handlers.

mod create_game;
mod finish_game;
mod get_game;
mod get_game_statistics;

pub use create_game::{CreateGameCommand, CreateGameHandler, CreateGameResult};
pub use finish_game::{FinishGameCommand, FinishGameHandler, FinishGameResult};
pub use get_game::{GetGameHandler, GetGameQuery};
pub use get_game_statistics::{GetGameStatisticsHandler, GetGameStatisticsQuery};
