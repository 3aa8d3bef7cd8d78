//! Players, games, best responses and equilibrium checks.
//!
//! Control flow for an equilibrium check:
//!
//! `NormalFormGame::is_nash` → rotate the profile for each player →
//! `Player::is_best_response` → `Player::payoff_vector` (the reduction)
//! → compare against the maximum payoff.

pub mod player;
pub mod best_response;
pub mod game;
pub mod equilibria;

pub use player::Player;
pub use best_response::{BestResponse, TieBreaking};
pub use game::NormalFormGame;
pub use equilibria::pure_nash_brute;
