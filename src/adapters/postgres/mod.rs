//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSetRepository` - Sets with their ordered action log
//! - `PostgresGameRepository` - Games with their ordered set list
//!
//! Both repositories guard `update` with a compare-and-swap on
//! `last_update`. The schema itself is provisioned outside this crate.

mod game_repository;
mod pool;
mod set_repository;

pub use game_repository::PostgresGameRepository;
pub use pool::connect_pool;
pub use set_repository::PostgresSetRepository;
