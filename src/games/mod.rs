//! Ready-made games.
//!
//! Classic two-player games with known equilibria, an N-player
//! coordination game, and random games for stress testing.

mod classic;

pub use classic::{
    coordination_game, matching_pennies, prisoners_dilemma, random_game, rock_paper_scissors,
    unanimity_game,
};
