//! FinishSetHandler - Command handler for closing a set and folding it into its game.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::SetId;
use crate::domain::game::Game;
use crate::domain::set::{MatchRules, Set, SetError, SetOutcome, WinCondition};
use crate::ports::{GameRepository, SetRepository};

/// Command to finish a set.
#[derive(Debug, Clone)]
pub struct FinishSetCommand {
    pub set_id: SetId,
    /// Overrides the threshold derived from the match rules.
    pub win_condition: Option<WinCondition>,
}

/// Result of a finish request.
#[derive(Debug, Clone)]
pub struct FinishSetResult {
    pub set: Set,
    pub outcome: SetOutcome,
    /// The owning game after the set was recorded; `None` when the set is not finished.
    pub game: Option<Game>,
}

/// Handler for finishing sets.
pub struct FinishSetHandler {
    sets: Arc<dyn SetRepository>,
    games: Arc<dyn GameRepository>,
    rules: MatchRules,
}

impl FinishSetHandler {
    pub fn new(
        sets: Arc<dyn SetRepository>,
        games: Arc<dyn GameRepository>,
        rules: MatchRules,
    ) -> Self {
        Self { sets, games, rules }
    }

    pub async fn handle(&self, cmd: FinishSetCommand) -> Result<FinishSetResult, SetError> {
        // 1. Load set and owning game
        let mut set = self
            .sets
            .find_by_id(&cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;
        let mut game = self
            .games
            .find_by_id(set.game_id())
            .await?
            .ok_or_else(|| SetError::game_not_found(*set.game_id()))?;
        let set_read_at = *set.last_update();
        let game_read_at = *game.last_update();

        // A set closed by an earlier request whose game write was lost is
        // recorded without finishing it again.
        let pending_winner = match set.set_winner() {
            Some(winner) if !set.is_active() && !game.set_ids().contains(set.id()) => Some(winner),
            _ => None,
        };

        // 2. Decide
        let outcome = if let Some(winner) = pending_winner {
            SetOutcome::Won(winner)
        } else {
            let condition = match cmd.win_condition {
                Some(condition) => condition,
                None => self
                    .rules
                    .win_condition_for(set.set_number(), game.best_of())?,
            };
            let outcome = set.finish(&condition)?;
            if outcome == SetOutcome::NotFinished {
                let (team, opponent) = set.score();
                info!(set_id = %cmd.set_id, team, opponent, "set not finished");
                return Ok(FinishSetResult {
                    set,
                    outcome,
                    game: None,
                });
            }
            outcome
        };

        // 3. Fold into the game before anything is written
        game.record_finished_set(&set)?;

        // 4. Persist set first, then game
        if pending_winner.is_none() {
            if let Err(err) = self.sets.update(&set, &set_read_at).await {
                warn!(set_id = %cmd.set_id, error = %err, "set close rejected");
                return Err(err.into());
            }
        }
        if let Err(err) = self.games.update(&game, &game_read_at).await {
            warn!(game_id = %game.id(), set_id = %cmd.set_id, error = %err, "game tally rejected");
            return Err(err.into());
        }

        info!(
            set_id = %cmd.set_id,
            game_id = %game.id(),
            winner = ?outcome.winner(),
            team_sets = game.team_sets_won(),
            opponent_sets = game.opponent_sets_won(),
            "set finished"
        );
        if let Some(winner) = game.winner() {
            info!(game_id = %game.id(), winner = %winner, "game decided");
        }

        Ok(FinishSetResult {
            set,
            outcome,
            game: Some(game),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryGameRepository, InMemorySetRepository};
    use crate::domain::foundation::{DomainError, GameId, Side, Timestamp};
    use async_trait::async_trait;

    struct Fixture {
        sets: Arc<InMemorySetRepository>,
        games: Arc<InMemoryGameRepository>,
        handler: FinishSetHandler,
        game: Game,
    }

    async fn fixture(best_of: u8) -> Fixture {
        let sets = Arc::new(InMemorySetRepository::new());
        let games = Arc::new(InMemoryGameRepository::new());
        let game = Game::new(GameId::new(), "Bayview".to_string(), best_of).unwrap();
        games.save(&game).await.unwrap();
        let handler = FinishSetHandler::new(sets.clone(), games.clone(), MatchRules::default());
        Fixture {
            sets,
            games,
            handler,
            game,
        }
    }

    /// Starts the next set of the fixture game and saves it with the given score.
    async fn played_set(f: &Fixture, team: u32, opponent: u32) -> Set {
        let mut game = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        let read_at = *game.last_update();
        let mut set = game.start_new_set().unwrap();
        f.games.update(&game, &read_at).await.unwrap();
        for _ in 0..team {
            set.apply_action("ATK_POINT").unwrap();
        }
        for _ in 0..opponent {
            set.apply_action("OPP_SRV_POINT").unwrap();
        }
        f.sets.save(&set).await.unwrap();
        set
    }

    fn command(set: &Set) -> FinishSetCommand {
        FinishSetCommand {
            set_id: *set.id(),
            win_condition: None,
        }
    }

    #[tokio::test]
    async fn twenty_five_twenty_closes_set_and_updates_game() {
        let f = fixture(5).await;
        let set = played_set(&f, 25, 20).await;

        let result = f.handler.handle(command(&set)).await.unwrap();

        assert_eq!(result.outcome, SetOutcome::Won(Side::Team));
        assert!(!result.set.is_active());
        assert_eq!(result.set.set_winner(), Some(Side::Team));

        let stored_set = f.sets.find_by_id(set.id()).await.unwrap().unwrap();
        assert!(!stored_set.is_active());
        let stored_game = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        assert_eq!(stored_game.set_ids(), &[*set.id()]);
        assert_eq!(stored_game.team_sets_won(), 1);
        assert!(stored_game.is_active());
    }

    #[tokio::test]
    async fn deuce_is_not_finished_and_nothing_is_written() {
        let f = fixture(5).await;
        let set = played_set(&f, 24, 24).await;

        let result = f.handler.handle(command(&set)).await.unwrap();

        assert_eq!(result.outcome, SetOutcome::NotFinished);
        assert!(result.game.is_none());
        assert_eq!(f.sets.find_by_id(set.id()).await.unwrap(), Some(set));
        let stored_game = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        assert!(stored_game.set_ids().is_empty());
    }

    #[tokio::test]
    async fn deciding_set_plays_to_fifteen() {
        let f = fixture(1).await;
        let set = played_set(&f, 15, 13).await;

        let result = f.handler.handle(command(&set)).await.unwrap();

        assert_eq!(result.outcome, SetOutcome::Won(Side::Team));
        let game = result.game.unwrap();
        assert_eq!(game.winner(), Some(Side::Team));
        assert!(game.is_finished());
    }

    #[tokio::test]
    async fn explicit_win_condition_overrides_rules() {
        let f = fixture(5).await;
        let set = played_set(&f, 3, 11).await;

        let result = f
            .handler
            .handle(FinishSetCommand {
                set_id: *set.id(),
                win_condition: Some(WinCondition::new(11, 2).unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, SetOutcome::Won(Side::Opponent));
        assert_eq!(result.game.unwrap().opponent_sets_won(), 1);
    }

    #[tokio::test]
    async fn finishing_twice_is_rejected() {
        let f = fixture(5).await;
        let set = played_set(&f, 25, 10).await;

        f.handler.handle(command(&set)).await.unwrap();
        let err = f.handler.handle(command(&set)).await.unwrap_err();

        assert_eq!(err, SetError::AlreadyFinished);
        let game = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        assert_eq!(game.team_sets_won(), 1);
    }

    #[tokio::test]
    async fn closed_set_missing_from_game_is_recorded() {
        let f = fixture(5).await;
        let mut set = played_set(&f, 25, 18).await;
        let read_at = *set.last_update();
        set.finish(&WinCondition::new(25, 2).unwrap()).unwrap();
        f.sets.update(&set, &read_at).await.unwrap();

        let result = f.handler.handle(command(&set)).await.unwrap();

        assert_eq!(result.outcome, SetOutcome::Won(Side::Team));
        let game = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        assert_eq!(game.set_ids(), &[*set.id()]);
    }

    #[tokio::test]
    async fn set_the_game_never_adopted_is_not_recorded() {
        let f = fixture(5).await;
        let live = played_set(&f, 0, 0).await;

        // Saved by a request whose game write lost the race.
        let mut orphan = Set::new(SetId::new(), *f.game.id(), 1);
        for _ in 0..25 {
            orphan.apply_action("ATK_POINT").unwrap();
        }
        f.sets.save(&orphan).await.unwrap();

        let err = f.handler.handle(command(&orphan)).await.unwrap_err();

        assert!(matches!(err, SetError::InvalidState(_)));
        assert!(f.sets.find_by_id(orphan.id()).await.unwrap().unwrap().is_active());
        let game = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        assert!(game.set_ids().is_empty());
        assert_eq!(game.live_set(), Some(live.id()));
    }

    #[tokio::test]
    async fn unknown_set_is_not_found() {
        let f = fixture(5).await;
        let id = SetId::new();
        let err = f
            .handler
            .handle(FinishSetCommand {
                set_id: id,
                win_condition: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, SetError::NotFound(id));
    }

    struct RacingGameRepository {
        inner: InMemoryGameRepository,
    }

    #[async_trait]
    impl GameRepository for RacingGameRepository {
        async fn save(&self, game: &Game) -> Result<(), DomainError> {
            self.inner.save(game).await
        }

        async fn update(&self, game: &Game, _expected: &Timestamp) -> Result<(), DomainError> {
            Err(DomainError::stale_write("Game", game.id()))
        }

        async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
            self.inner.find_by_id(id).await
        }
    }

    #[tokio::test]
    async fn lost_game_write_can_be_retried() {
        let f = fixture(5).await;
        let set = played_set(&f, 25, 21).await;

        let racing = Arc::new(RacingGameRepository {
            inner: InMemoryGameRepository::new(),
        });
        let current = f.games.find_by_id(f.game.id()).await.unwrap().unwrap();
        racing.save(&current).await.unwrap();
        let flaky = FinishSetHandler::new(f.sets.clone(), racing, MatchRules::default());

        let err = flaky.handle(command(&set)).await.unwrap_err();
        assert_eq!(err, SetError::StaleWrite);

        // The set is closed but the game never saw it; a retry records it.
        let result = f.handler.handle(command(&set)).await.unwrap();
        assert_eq!(result.game.unwrap().team_sets_won(), 1);
    }
}
