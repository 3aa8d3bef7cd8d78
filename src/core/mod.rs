//! Core building blocks: payoff arrays, actions, profile rotation, RNG,
//! configuration and errors.
//!
//! Nothing in here knows about players or games; `normal_form` builds on
//! these types.

pub mod tensor;
pub mod action;
pub mod rotation;
pub mod rng;
pub mod config;
pub mod error;

pub use tensor::{Indices, PayoffArray, Shape};
pub use action::{pure2mixed, Action};
pub use rng::GameRng;
pub use config::{PlayerConfig, DEFAULT_TOLERANCE};
pub use error::GameError;
