//! Tie-breaking policies and best-response results.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// How `best_response` picks among actions tied at the maximum payoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreaking {
    /// The lowest best-response index.
    #[default]
    First,
    /// A best response drawn uniformly at random.
    Random,
    /// Every best response, in ascending order.
    All,
}

impl FromStr for TieBreaking {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(TieBreaking::First),
            "random" => Ok(TieBreaking::Random),
            "all" | "false" => Ok(TieBreaking::All),
            other => Err(GameError::UnknownTieBreaking(other.to_string())),
        }
    }
}

/// Result of a best-response query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestResponse {
    /// A single pure action (`First` or `Random`).
    Action(usize),
    /// All best-response pure actions, ascending (`All`).
    Actions(Vec<usize>),
}

impl BestResponse {
    /// The single chosen action, if this is not an `All` result.
    #[must_use]
    pub fn action(&self) -> Option<usize> {
        match self {
            BestResponse::Action(a) => Some(*a),
            BestResponse::Actions(_) => None,
        }
    }

    /// Every action in the result.
    #[must_use]
    pub fn actions(&self) -> &[usize] {
        match self {
            BestResponse::Action(a) => std::slice::from_ref(a),
            BestResponse::Actions(all) => all,
        }
    }
}
