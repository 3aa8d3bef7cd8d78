//! Profile rotation: presenting a global action profile in one player's
//! axis order.
//!
//! Player `i`'s payoff tensor stores its own action on axis 0 and the
//! other players on axes 1..N-1 in cyclic order `i+1, i+2, ..., i+N-1`
//! (mod N). Every translation between the global profile order and a
//! player's axis order goes through the helpers here.

use super::tensor::Shape;

/// Global position of the player sitting `offset` places after `player`.
#[must_use]
pub fn rotated_position(player: usize, offset: usize, num_players: usize) -> usize {
    (player + offset) % num_players
}

/// The whole profile in `player`'s axis order, starting with `player`.
///
/// ```
/// use rust_nfg::core::rotation::rotated;
///
/// let profile = ['a', 'b', 'c'];
/// let seen: Vec<_> = rotated(&profile, 1).copied().collect();
/// assert_eq!(seen, vec!['b', 'c', 'a']);
/// ```
pub fn rotated<T>(
    profile: &[T],
    player: usize,
) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
    let n = profile.len();
    (0..n).map(move |offset| &profile[rotated_position(player, offset, n)])
}

/// The opponents of `player`, in the order of axes 1..N-1 of its tensor.
///
/// ```
/// use rust_nfg::core::rotation::opponents;
///
/// let profile = [10, 11, 12, 13];
/// let seen: Vec<_> = opponents(&profile, 2).copied().collect();
/// assert_eq!(seen, vec![13, 10, 11]);
/// ```
pub fn opponents<T>(
    profile: &[T],
    player: usize,
) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
    let n = profile.len();
    (1..n).map(move |offset| &profile[rotated_position(player, offset, n)])
}

/// Shape of `player`'s payoff tensor given every player's action count.
#[must_use]
pub fn rotated_shape(nums_actions: &[usize], player: usize) -> Shape {
    rotated(nums_actions, player).copied().collect()
}

/// `player`'s tensor coordinate for a global pure action profile.
#[must_use]
pub fn rotated_index(profile: &[usize], player: usize) -> Shape {
    rotated(profile, player).copied().collect()
}
