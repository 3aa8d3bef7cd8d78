//! Player configuration.

use serde::{Deserialize, Serialize};

/// Default tolerance for near-optimality comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Numerical settings for best-response and equilibrium checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// An action counts as a best response when its payoff is at least
    /// `max_payoff - tolerance`.
    pub tolerance: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PlayerConfig {
    /// Create a new config with a custom tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
