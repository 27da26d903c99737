//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SetRepository` - Set aggregates with their ordered action log
//! - `GameRepository` - Game aggregates with their set tally

mod game_repository;
mod set_repository;

pub use game_repository::GameRepository;
pub use set_repository::SetRepository;
