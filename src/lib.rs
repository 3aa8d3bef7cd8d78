//! # rust-nfg
//!
//! Finite N-player normal-form games: payoff reduction, best responses and
//! Nash equilibrium checks.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: every payoff tensor has one axis per player and
//!    the same code path handles one, two or many players.
//!
//! 2. **Rotated Tensors**: each player's tensor puts its own action on
//!    axis 0 and the other players after it in cyclic order. All
//!    translation between global profiles and a player's axes goes
//!    through `core::rotation`.
//!
//! 3. **Explicit Actions**: pure and mixed actions are variants of
//!    `Action`; the reduction matches on the variant one opponent at a
//!    time.
//!
//! 4. **Injected Randomness**: random tie-breaking draws from a
//!    caller-owned, seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: payoff arrays, actions, rotation, RNG, configuration, errors
//! - `normal_form`: `Player`, `NormalFormGame`, best responses, equilibria
//! - `games`: classic and random games
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_nfg::core::Action;
//! use rust_nfg::games::matching_pennies;
//!
//! let game = matching_pennies();
//! assert!(!game.is_nash(&Action::pure_profile(&[0, 0])).unwrap());
//!
//! let half = Action::Mixed(vec![0.5, 0.5]);
//! assert!(game.is_nash(&[half.clone(), half]).unwrap());
//! ```

pub mod core;
pub mod normal_form;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    pure2mixed, Action, GameError, GameRng, Indices, PayoffArray, PlayerConfig,
    Shape, DEFAULT_TOLERANCE,
};

pub use crate::normal_form::{
    pure_nash_brute, BestResponse, NormalFormGame, Player, TieBreaking,
};
