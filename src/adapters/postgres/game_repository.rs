//! PostgreSQL implementation of GameRepository.
//!
//! Recorded sets are stored as a `UUID[]` column in play order; the started
//! but unrecorded set lives in the nullable `live_set_id`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::set_repository::parse_side;
use crate::domain::foundation::{DomainError, GameId, SetId, Timestamp};
use crate::domain::game::Game;
use crate::ports::GameRepository;

/// PostgreSQL implementation of GameRepository.
#[derive(Clone)]
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    /// Creates a new PostgresGameRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &GameId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM games WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check game existence", e))?;

        Ok(result.0 > 0)
    }
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO games (
                id, opponent, best_of, set_ids, live_set_id, team_sets_won,
                opponent_sets_won, is_active, winner, created_at, last_update
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(game.id().as_uuid())
        .bind(game.opponent())
        .bind(i16::from(game.best_of()))
        .bind(set_id_list(game))
        .bind(game.live_set().map(|id| *id.as_uuid()))
        .bind(i16::from(game.team_sets_won()))
        .bind(i16::from(game.opponent_sets_won()))
        .bind(game.is_active())
        .bind(game.winner().map(|s| s.as_str()))
        .bind(game.created_at().as_datetime())
        .bind(game.last_update().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert game", e))?;

        Ok(())
    }

    async fn update(
        &self,
        game: &Game,
        expected_last_update: &Timestamp,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE games SET
                set_ids = $2,
                live_set_id = $3,
                team_sets_won = $4,
                opponent_sets_won = $5,
                is_active = $6,
                winner = $7,
                last_update = $8
            WHERE id = $1 AND last_update = $9
            "#,
        )
        .bind(game.id().as_uuid())
        .bind(set_id_list(game))
        .bind(game.live_set().map(|id| *id.as_uuid()))
        .bind(i16::from(game.team_sets_won()))
        .bind(i16::from(game.opponent_sets_won()))
        .bind(game.is_active())
        .bind(game.winner().map(|s| s.as_str()))
        .bind(game.last_update().as_datetime())
        .bind(expected_last_update.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update game", e))?;

        if result.rows_affected() == 0 {
            if self.exists(game.id()).await? {
                return Err(DomainError::stale_write("Game", game.id()));
            }
            return Err(DomainError::game_not_found(game.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, opponent, best_of, set_ids, live_set_id, team_sets_won,
                   opponent_sets_won, is_active, winner, created_at, last_update
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch game", e))?;

        row.map(row_to_game).transpose()
    }
}

fn set_id_list(game: &Game) -> Vec<Uuid> {
    game.set_ids().iter().map(|id| *id.as_uuid()).collect()
}

fn small_count(column: &str, value: i16) -> Result<u8, DomainError> {
    u8::try_from(value)
        .map_err(|e| DomainError::database(&format!("Invalid {} {}", column, value), e))
}

fn row_to_game(row: PgRow) -> Result<Game, DomainError> {
    let get_err = |e: sqlx::Error| DomainError::database("Failed to read game row", e);

    let id: Uuid = row.try_get("id").map_err(get_err)?;
    let opponent: String = row.try_get("opponent").map_err(get_err)?;
    let best_of: i16 = row.try_get("best_of").map_err(get_err)?;
    let set_ids: Vec<Uuid> = row.try_get("set_ids").map_err(get_err)?;
    let live_set_id: Option<Uuid> = row.try_get("live_set_id").map_err(get_err)?;
    let team_sets_won: i16 = row.try_get("team_sets_won").map_err(get_err)?;
    let opponent_sets_won: i16 = row.try_get("opponent_sets_won").map_err(get_err)?;
    let is_active: bool = row.try_get("is_active").map_err(get_err)?;
    let winner: Option<String> = row.try_get("winner").map_err(get_err)?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(get_err)?;
    let last_update: chrono::DateTime<chrono::Utc> =
        row.try_get("last_update").map_err(get_err)?;

    Ok(Game::reconstitute(
        GameId::from_uuid(id),
        opponent,
        small_count("best_of", best_of)?,
        set_ids.into_iter().map(SetId::from_uuid).collect(),
        live_set_id.map(SetId::from_uuid),
        small_count("team_sets_won", team_sets_won)?,
        small_count("opponent_sets_won", opponent_sets_won)?,
        is_active,
        winner.as_deref().map(parse_side).transpose()?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(last_update),
    ))
}
