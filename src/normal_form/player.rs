//! A single participant of a normal-form game.
//!
//! ## Payoff tensor layout
//!
//! `payoffs[a_0, a_1, ..., a_{N-1}]` is this player's payoff when it plays
//! `a_0` and its opponents play `a_1, ..., a_{N-1}`. Opponents appear in
//! cyclic order starting from the player seated after this one, see
//! [`crate::core::rotation`].
//!
//! ## Payoff reduction
//!
//! `payoff_vector` collapses the tensor one opponent at a time, starting
//! from the last axis. A pure action selects a slice of that axis, a
//! mixed action takes the expectation over it. Removing axes from the end
//! never shifts the earlier ones, so pure and mixed opponents can be
//! combined freely.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::core::{Action, GameError, GameRng, PayoffArray, PlayerConfig};

use super::best_response::{BestResponse, TieBreaking};

/// One player's payoff tensor plus the tolerance used to compare payoffs.
///
/// ## Example
///
/// ```
/// use rust_nfg::core::{Action, PayoffArray};
/// use rust_nfg::normal_form::Player;
///
/// let matrix = PayoffArray::from_matrix(vec![vec![4.0, 0.0], vec![3.0, 2.0]]).unwrap();
/// let player = Player::new(matrix).unwrap();
///
/// assert_eq!(player.payoff_vector(&[Action::Pure(1)]).unwrap(), vec![0.0, 2.0]);
/// assert_eq!(player.payoff_vector(&[vec![0.5, 0.5].into()]).unwrap(), vec![2.0, 2.5]);
/// assert!(player.is_best_response(&Action::Pure(0), &[Action::Pure(0)]).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayer")]
pub struct Player {
    payoffs: PayoffArray,
    tolerance: f64,
}

#[derive(Deserialize)]
struct RawPlayer {
    payoffs: PayoffArray,
    tolerance: f64,
}

impl TryFrom<RawPlayer> for Player {
    type Error = GameError;

    fn try_from(raw: RawPlayer) -> Result<Self, Self::Error> {
        Self::with_config(raw.payoffs, &PlayerConfig::default().with_tolerance(raw.tolerance))
    }
}

impl Player {
    /// Create a player with the default tolerance.
    ///
    /// Fails if `payoffs` is rank 0 or some axis has no actions.
    pub fn new(payoffs: PayoffArray) -> Result<Self, GameError> {
        Self::with_config(payoffs, &PlayerConfig::default())
    }

    /// Create a player with explicit settings.
    pub fn with_config(payoffs: PayoffArray, config: &PlayerConfig) -> Result<Self, GameError> {
        if payoffs.ndim() == 0 {
            return Err(GameError::ScalarPayoff);
        }
        if payoffs.shape().contains(&0) {
            return Err(GameError::InvalidActionSizes {
                sizes: payoffs.shape().to_vec(),
            });
        }
        Ok(Self {
            payoffs,
            tolerance: config.tolerance,
        })
    }

    /// Player with the default tolerance from payoffs already known to be
    /// at least rank 1 with no empty axis.
    pub(crate) fn new_unchecked(payoffs: PayoffArray) -> Self {
        Self {
            payoffs,
            tolerance: PlayerConfig::default().tolerance,
        }
    }

    /// The payoff tensor.
    #[must_use]
    pub fn payoffs(&self) -> &PayoffArray {
        &self.payoffs
    }

    pub(crate) fn payoffs_mut(&mut self) -> &mut PayoffArray {
        &mut self.payoffs
    }

    /// Number of actions available to this player.
    #[must_use]
    pub fn num_actions(&self) -> usize {
        self.payoffs.shape()[0]
    }

    /// Number of opponents (tensor rank minus one).
    #[must_use]
    pub fn num_opponents(&self) -> usize {
        self.payoffs.ndim() - 1
    }

    /// Full tensor shape: own action count, then each opponent's.
    #[must_use]
    pub fn action_sizes(&self) -> &[usize] {
        self.payoffs.shape()
    }

    /// Tolerance for near-optimality comparisons.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Change the tolerance.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    /// Payoff of each own action against `opponents_actions`.
    ///
    /// `opponents_actions[k]` is the action of the opponent on tensor axis
    /// `k + 1`. With no opponents the input is ignored and the tensor is
    /// returned as is.
    pub fn payoff_vector(&self, opponents_actions: &[Action]) -> Result<Vec<f64>, GameError> {
        self.reduce(opponents_actions)
    }

    /// True if `own_action` earns at least the best payoff minus the tolerance.
    ///
    /// A mixed `own_action` is scored by its expected payoff.
    pub fn is_best_response(
        &self,
        own_action: &Action,
        opponents_actions: &[Action],
    ) -> Result<bool, GameError> {
        self.is_best_response_to(own_action, opponents_actions)
    }

    /// Best-response pure action(s) to `opponents_actions`.
    ///
    /// `rng` is only drawn from for `TieBreaking::Random` with more than
    /// one candidate.
    pub fn best_response(
        &self,
        opponents_actions: &[Action],
        tie_breaking: TieBreaking,
        rng: &mut GameRng,
    ) -> Result<BestResponse, GameError> {
        let candidates = self.best_responses(opponents_actions)?;
        let first = candidates[0];
        Ok(match tie_breaking {
            TieBreaking::First => BestResponse::Action(first),
            TieBreaking::Random => {
                BestResponse::Action(rng.random_choice(&candidates).unwrap_or(first))
            }
            TieBreaking::All => BestResponse::Actions(candidates),
        })
    }

    /// Every pure action within the tolerance of the best payoff, ascending.
    ///
    /// Never empty: fails with `UndefinedPayoff` instead.
    pub fn best_responses(&self, opponents_actions: &[Action]) -> Result<Vec<usize>, GameError> {
        let payoffs = self.payoff_vector(opponents_actions)?;
        let threshold = max_payoff(&payoffs)? - self.tolerance;
        let candidates: Vec<usize> = payoffs
            .iter()
            .enumerate()
            .filter(|&(_, &payoff)| payoff >= threshold)
            .map(|(action, _)| action)
            .collect();
        if candidates.is_empty() {
            return Err(GameError::UndefinedPayoff(payoffs));
        }
        Ok(candidates)
    }

    /// The lowest-index best response.
    pub fn first_best_response(&self, opponents_actions: &[Action]) -> Result<usize, GameError> {
        let payoffs = self.payoff_vector(opponents_actions)?;
        let threshold = max_payoff(&payoffs)? - self.tolerance;
        payoffs
            .iter()
            .position(|&payoff| payoff >= threshold)
            .ok_or_else(|| GameError::UndefinedPayoff(payoffs.clone()))
    }

    /// A pure action drawn uniformly from `actions`, or from all actions
    /// when `actions` is `None` or empty.
    ///
    /// A single candidate is returned without drawing.
    pub fn random_choice(&self, actions: Option<&[usize]>, rng: &mut GameRng) -> usize {
        match actions {
            Some(actions) if !actions.is_empty() => {
                rng.random_choice(actions).unwrap_or(actions[0])
            }
            _ if self.num_actions() == 1 => 0,
            _ => rng.gen_range_usize(0..self.num_actions()),
        }
    }

    /// Reduce the tensor against opponents given in axis order.
    pub(crate) fn reduce<'a, I>(&self, opponents_actions: I) -> Result<Vec<f64>, GameError>
    where
        I: IntoIterator<Item = &'a Action>,
        I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    {
        if self.num_opponents() == 0 {
            return Ok(self.payoffs.data().to_vec());
        }

        let opponents_actions = opponents_actions.into_iter();
        if opponents_actions.len() != self.num_opponents() {
            return Err(GameError::OpponentCount {
                expected: self.num_opponents(),
                found: opponents_actions.len(),
            });
        }

        let mut reduced = Cow::Borrowed(&self.payoffs);
        for action in opponents_actions.rev() {
            let num_actions = reduced.shape()[reduced.ndim() - 1];
            action.validate(num_actions)?;
            reduced = Cow::Owned(match action {
                Action::Pure(index) => reduced.take_last(*index)?,
                Action::Mixed(probs) => reduced.dot_last(probs)?,
            });
        }
        Ok(reduced.into_owned().into_data())
    }

    pub(crate) fn is_best_response_to<'a, I>(
        &self,
        own_action: &Action,
        opponents_actions: I,
    ) -> Result<bool, GameError>
    where
        I: IntoIterator<Item = &'a Action>,
        I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    {
        own_action.validate(self.num_actions())?;
        let payoffs = self.reduce(opponents_actions)?;
        let max = max_payoff(&payoffs)?;
        let realized = own_action.realized_payoff(&payoffs);
        log::trace!("payoff vector {payoffs:?}: realized {realized}, max {max}");
        Ok(realized >= max - self.tolerance)
    }
}

fn max_payoff(payoffs: &[f64]) -> Result<f64, GameError> {
    payoffs
        .iter()
        .copied()
        .filter(|p| !p.is_nan())
        .reduce(f64::max)
        .ok_or_else(|| GameError::UndefinedPayoff(payoffs.to_vec()))
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Player in a {}-player game ({} actions):",
            self.num_opponents() + 1,
            self.num_actions()
        )?;
        write!(f, "{}", self.payoffs)
    }
}
