//! In-memory adapters - Process-local repository implementations.
//!
//! Used by tests and local development. Compare-and-swap checks run under
//! the same write lock as the write itself.

mod game_repository;
mod set_repository;

pub use game_repository::InMemoryGameRepository;
pub use set_repository::InMemorySetRepository;
