//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Process-local repositories for tests and development
//! - `postgres` - PostgreSQL repositories and pool construction

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryGameRepository, InMemorySetRepository};
pub use postgres::{connect_pool, PostgresGameRepository, PostgresSetRepository};
