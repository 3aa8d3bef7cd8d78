//! Pure and mixed actions.
//!
//! An action is either a pure action (an index into the player's action
//! set) or a mixed action (a probability vector over that set). Payoff
//! reduction accepts both interchangeably, one opponent at a time.
//!
//! Mixed actions are assumed to be probability vectors. They are not
//! rejected when they are not: the reduction is linear, so the result is
//! the corresponding weighted sum. A warning is logged instead.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// How far a mixed action's total may drift from 1 before a warning.
const PROBABILITY_SUM_SLACK: f64 = 1e-6;

/// A single player's action.
///
/// ```
/// use rust_nfg::core::Action;
///
/// let pure: Action = 1.into();
/// let mixed: Action = vec![0.25, 0.75].into();
/// assert_eq!(pure, Action::Pure(1));
/// assert_eq!(mixed, Action::Mixed(vec![0.25, 0.75]));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the action at this index with certainty.
    Pure(usize),
    /// Randomize over actions with these probabilities.
    Mixed(Vec<f64>),
}

impl Action {
    /// Build a profile of pure actions.
    #[must_use]
    pub fn pure_profile(actions: &[usize]) -> Vec<Action> {
        actions.iter().copied().map(Action::Pure).collect()
    }

    /// Check this action against a player with `num_actions` actions.
    pub fn validate(&self, num_actions: usize) -> Result<(), GameError> {
        match self {
            Action::Pure(action) if *action >= num_actions => Err(GameError::ActionOutOfRange {
                action: *action,
                num_actions,
            }),
            Action::Pure(_) => Ok(()),
            Action::Mixed(probs) if probs.len() != num_actions => {
                Err(GameError::MixedActionLength {
                    num_actions,
                    found: probs.len(),
                })
            }
            Action::Mixed(probs) => {
                warn_if_not_distribution(probs);
                Ok(())
            }
        }
    }

    /// Payoff of this action against a payoff vector (one entry per own action).
    ///
    /// The caller must have validated the action against `payoffs.len()`.
    pub(crate) fn realized_payoff(&self, payoffs: &[f64]) -> f64 {
        match self {
            Action::Pure(action) => payoffs[*action],
            Action::Mixed(probs) => probs.iter().zip(payoffs).map(|(p, v)| p * v).sum(),
        }
    }
}

impl From<usize> for Action {
    fn from(action: usize) -> Self {
        Action::Pure(action)
    }
}

impl From<Vec<f64>> for Action {
    fn from(probs: Vec<f64>) -> Self {
        Action::Mixed(probs)
    }
}

fn warn_if_not_distribution(probs: &[f64]) {
    let total: f64 = probs.iter().sum();
    if probs.iter().any(|&p| p < 0.0) || (total - 1.0).abs() > PROBABILITY_SUM_SLACK {
        log::warn!("mixed action {probs:?} is not a probability vector (sum {total})");
    }
}

/// Convert a pure action into the equivalent one-hot mixed action.
///
/// Fails with `ActionOutOfRange` unless `action < num_actions`.
///
/// ```
/// use rust_nfg::core::pure2mixed;
///
/// assert_eq!(pure2mixed(3, 1).unwrap(), vec![0.0, 1.0, 0.0]);
/// assert!(pure2mixed(2, 2).is_err());
/// ```
pub fn pure2mixed(num_actions: usize, action: usize) -> Result<Vec<f64>, GameError> {
    Action::Pure(action).validate(num_actions)?;
    let mut mixed = vec![0.0; num_actions];
    mixed[action] = 1.0;
    Ok(mixed)
}
