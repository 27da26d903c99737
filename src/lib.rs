//! Volley Stats - Volleyball set and game statistics
//!
//! Accumulates recorded rally actions into per-set statistics, closes sets
//! under configurable win conditions and folds finished sets into a
//! best-of-N game tally.
//!
//! Layers:
//! - `domain` - action vocabulary, set and game aggregates (pure computation)
//! - `ports` - repository contracts with compare-and-swap updates
//! - `application` - one handler per inbound operation
//! - `adapters` - in-memory and PostgreSQL repositories
//! - `config` / `telemetry` - environment configuration and log setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
