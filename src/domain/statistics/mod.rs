//! Statistics domain module.
//!
//! Pure computation over recorded actions: classifying action codes and
//! accumulating them into per-skill counters and derived ratios.

mod action;
mod stat_sheet;

pub use action::{classify, ActionCategory, ActionCode, OpponentAction, Outcome, Skill};
pub use stat_sheet::{OpponentStats, SkillStats, StatSheet, Totals};
