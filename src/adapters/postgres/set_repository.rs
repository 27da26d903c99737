//! PostgreSQL implementation of SetRepository.
//!
//! The action log is stored as a `TEXT[]` column so order round-trips
//! exactly. Derived counters are written alongside it for reporting queries
//! but never read back: loading a set replays its action log.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

use crate::domain::foundation::{DomainError, GameId, SetId, Side, Timestamp};
use crate::domain::set::Set;
use crate::domain::statistics::{ActionCode, SkillStats, StatSheet};
use crate::ports::SetRepository;

/// PostgreSQL implementation of SetRepository.
#[derive(Clone)]
pub struct PostgresSetRepository {
    pool: PgPool,
}

impl PostgresSetRepository {
    /// Creates a new PostgresSetRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &SetId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sets WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check set existence", e))?;

        Ok(result.0 > 0)
    }
}

#[async_trait]
impl SetRepository for PostgresSetRepository {
    async fn save(&self, set: &Set) -> Result<(), DomainError> {
        let query = sqlx::query(
            r#"
            INSERT INTO sets (
                id, game_id, set_number, started_at, is_active, game_actions,
                set_winner, last_update,
                attack_total, attack_point, attack_neutral, attack_error, attack_effectiveness,
                block_total, block_point, block_neutral, block_error, block_effectiveness,
                serve_total, serve_point, serve_neutral, serve_error, serve_effectiveness,
                opponent_attacks, opponent_blocks, opponent_serves, opponent_errors,
                total_points, total_actions, total_effectiveness, total_errors, opponent_points
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8,
                $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18,
                $19, $20, $21, $22, $23,
                $24, $25, $26, $27,
                $28, $29, $30, $31, $32
            )
            "#,
        )
        .bind(set.id().as_uuid())
        .bind(set.game_id().as_uuid())
        .bind(i16::from(set.set_number()))
        .bind(set.started_at().as_datetime())
        .bind(set.is_active())
        .bind(action_log(set))
        .bind(set.set_winner().map(|s| s.as_str()))
        .bind(set.last_update().as_datetime());

        bind_stat_columns(query, set.stats())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to insert set", e))?;

        Ok(())
    }

    async fn update(&self, set: &Set, expected_last_update: &Timestamp) -> Result<(), DomainError> {
        let query = sqlx::query(
            r#"
            UPDATE sets SET
                is_active = $2,
                game_actions = $3,
                set_winner = $4,
                last_update = $5,
                attack_total = $7, attack_point = $8, attack_neutral = $9,
                attack_error = $10, attack_effectiveness = $11,
                block_total = $12, block_point = $13, block_neutral = $14,
                block_error = $15, block_effectiveness = $16,
                serve_total = $17, serve_point = $18, serve_neutral = $19,
                serve_error = $20, serve_effectiveness = $21,
                opponent_attacks = $22, opponent_blocks = $23,
                opponent_serves = $24, opponent_errors = $25,
                total_points = $26, total_actions = $27, total_effectiveness = $28,
                total_errors = $29, opponent_points = $30
            WHERE id = $1 AND last_update = $6
            "#,
        )
        .bind(set.id().as_uuid())
        .bind(set.is_active())
        .bind(action_log(set))
        .bind(set.set_winner().map(|s| s.as_str()))
        .bind(set.last_update().as_datetime())
        .bind(expected_last_update.as_datetime());

        let result = bind_stat_columns(query, set.stats())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to update set", e))?;

        if result.rows_affected() == 0 {
            if self.exists(set.id()).await? {
                return Err(DomainError::stale_write("Set", set.id()));
            }
            return Err(DomainError::set_not_found(set.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SetId) -> Result<Option<Set>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, game_id, set_number, started_at, is_active, game_actions,
                   set_winner, last_update
            FROM sets
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch set", e))?;

        row.map(row_to_set).transpose()
    }

    async fn find_by_game(&self, game_id: &GameId) -> Result<Vec<Set>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, game_id, set_number, started_at, is_active, game_actions,
                   set_winner, last_update
            FROM sets
            WHERE game_id = $1
            ORDER BY set_number ASC, started_at ASC
            "#,
        )
        .bind(game_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch sets by game", e))?;

        rows.into_iter().map(row_to_set).collect()
    }
}

fn action_log(set: &Set) -> Vec<String> {
    set.actions().iter().map(|a| a.as_str().to_string()).collect()
}

/// Binds the 24 derived counter columns, in table order.
fn bind_stat_columns<'q>(
    query: Query<'q, Postgres, PgArguments>,
    stats: &StatSheet,
) -> Query<'q, Postgres, PgArguments> {
    let query = [stats.attack(), stats.block(), stats.serve()]
        .into_iter()
        .fold(query, bind_skill);

    let opponent = stats.opponent();
    let totals = stats.totals();
    query
        .bind(opponent.attacks as i32)
        .bind(opponent.blocks as i32)
        .bind(opponent.serves as i32)
        .bind(opponent.errors as i32)
        .bind(totals.points as i32)
        .bind(totals.actions as i32)
        .bind(totals.effectiveness.value())
        .bind(totals.errors as i32)
        .bind(totals.opponent_points as i32)
}

fn bind_skill<'q>(
    query: Query<'q, Postgres, PgArguments>,
    skill: &SkillStats,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(skill.total() as i32)
        .bind(skill.point() as i32)
        .bind(skill.neutral() as i32)
        .bind(skill.error() as i32)
        .bind(skill.effectiveness().value())
}

fn row_to_set(row: PgRow) -> Result<Set, DomainError> {
    let get_err = |e: sqlx::Error| DomainError::database("Failed to read set row", e);

    let id: uuid::Uuid = row.try_get("id").map_err(get_err)?;
    let game_id: uuid::Uuid = row.try_get("game_id").map_err(get_err)?;
    let set_number: i16 = row.try_get("set_number").map_err(get_err)?;
    let started_at: chrono::DateTime<chrono::Utc> = row.try_get("started_at").map_err(get_err)?;
    let is_active: bool = row.try_get("is_active").map_err(get_err)?;
    let codes: Vec<String> = row.try_get("game_actions").map_err(get_err)?;
    let set_winner: Option<String> = row.try_get("set_winner").map_err(get_err)?;
    let last_update: chrono::DateTime<chrono::Utc> =
        row.try_get("last_update").map_err(get_err)?;

    let set_number = u8::try_from(set_number)
        .map_err(|e| DomainError::database(&format!("Invalid set_number {}", set_number), e))?;

    let actions = codes
        .iter()
        .map(|code| code.parse::<ActionCode>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DomainError::database("Corrupt action log", e))?;

    let set_winner = set_winner.as_deref().map(parse_side).transpose()?;

    Ok(Set::reconstitute(
        SetId::from_uuid(id),
        GameId::from_uuid(game_id),
        set_number,
        Timestamp::from_datetime(started_at),
        is_active,
        actions,
        set_winner,
        Timestamp::from_datetime(last_update),
    ))
}

pub(super) fn parse_side(s: &str) -> Result<Side, DomainError> {
    Side::parse(s).ok_or_else(|| DomainError::database("Invalid side", format!("'{}'", s)))
}
