//! Effectiveness value object (ratio on the 0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of successful actions among all actions of a category.
///
/// Always finite and within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Effectiveness(f64);

impl Effectiveness {
    /// No successful actions (also used when there are no actions at all).
    pub const ZERO: Self = Self(0.0);

    /// Every action was successful.
    pub const FULL: Self = Self(1.0);

    /// Computes `successes / total`, yielding zero when `total` is zero.
    pub fn ratio(successes: u32, total: u32) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        Self::clamped(f64::from(successes) / f64::from(total))
    }

    /// Returns the ratio as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }
}

impl Default for Effectiveness {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
