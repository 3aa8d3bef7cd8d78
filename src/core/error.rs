//! Error type shared by every fallible operation in the crate.
//!
//! All operations are pure computations, so errors are reported to the
//! caller synchronously and nothing is retried.

use thiserror::Error;

/// Errors raised when payoff data, action profiles or options are invalid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("payoff array must have at least one dimension")]
    ScalarPayoff,

    #[error("action sizes must be non-empty and every player needs at least one action (got {sizes:?})")]
    InvalidActionSizes { sizes: Vec<usize> },

    #[error("shape {shape:?} holds {expected} values but {found} were supplied")]
    DataLength {
        shape: Vec<usize>,
        expected: usize,
        found: usize,
    },

    #[error("shapes of payoff arrays must be consistent: player {player} has {found:?}, expected {expected:?}")]
    InconsistentShapes {
        player: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("player {player}'s payoff array has rank {rank} but the game has {num_players} players")]
    RankMismatch {
        player: usize,
        rank: usize,
        num_players: usize,
    },

    #[error("symmetric two-player game must be represented by a square matrix (got shape {shape:?})")]
    NonSquareMatrix { shape: Vec<usize> },

    #[error("size of innermost axis ({found}) must equal the number of players ({expected})")]
    ProfileAxisMismatch { expected: usize, found: usize },

    #[error("action profile must have length {expected} (got {found})")]
    ProfileLength { expected: usize, found: usize },

    #[error("payoff profile must have length {expected} (got {found})")]
    PayoffProfileLength { expected: usize, found: usize },

    #[error("expected actions for {expected} opponents (got {found})")]
    OpponentCount { expected: usize, found: usize },

    #[error("index has {found} coordinates but the array has rank {expected}")]
    IndexArity { expected: usize, found: usize },

    #[error("index {index} out of bounds for axis {axis} of size {size}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        size: usize,
    },

    #[error("pure action {action} out of range for {num_actions} actions")]
    ActionOutOfRange { action: usize, num_actions: usize },

    #[error("mixed action has {found} probabilities but there are {num_actions} actions")]
    MixedActionLength { num_actions: usize, found: usize },

    #[error("payoff vector {0:?} has no maximum")]
    UndefinedPayoff(Vec<f64>),

    #[error("cannot reduce a rank-0 payoff array")]
    NothingToReduce,

    #[error("tie_breaking must be one of 'first', 'random' or 'all'/'false' (got '{0}')")]
    UnknownTieBreaking(String),
}
