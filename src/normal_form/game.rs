//! N-player normal-form games.
//!
//! A `NormalFormGame` owns one `Player` per participant. Player `i`'s
//! tensor stores the other players in cyclic order `i+1, ..., i+N-1`, so
//! every profile-level operation rotates the global profile into each
//! player's axis order before touching its tensor.
//!
//! ## Construction
//!
//! Each input shape has its own constructor; nothing is inferred from the
//! rank of the data:
//!
//! - `from_players`: players whose shapes are already rotation-consistent
//! - `zeros`: all-zero game from action counts, filled in later
//! - `symmetric`: square matrix for a symmetric two-player game
//! - `from_payoff_profiles`: tensor of shape `(n_0, ..., n_{N-1}, N)`
//! - `from_bimatrix`: rows of `(row payoff, column payoff)` pairs

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

use crate::core::rotation::{opponents, rotated_index, rotated_position, rotated_shape};
use crate::core::{Action, GameError, PayoffArray, PlayerConfig, Shape};

use super::player::Player;

/// A finite N-player game in normal form.
///
/// ## Example
///
/// ```
/// use rust_nfg::core::Action;
/// use rust_nfg::normal_form::NormalFormGame;
///
/// let mut game = NormalFormGame::zeros(&[2, 2]).unwrap();
/// game.set_payoff_profile(&[0, 0], &[0.0, 10.0]).unwrap();
/// game.set_payoff_profile(&[0, 1], &[0.0, 10.0]).unwrap();
/// game.set_payoff_profile(&[1, 0], &[3.0, 5.0]).unwrap();
/// game.set_payoff_profile(&[1, 1], &[-2.0, 0.0]).unwrap();
///
/// assert_eq!(game.payoff_profile(&[1, 0]).unwrap(), vec![3.0, 5.0]);
/// assert!(game.is_nash(&Action::pure_profile(&[1, 0])).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct NormalFormGame {
    players: Vec<Player>,
    nums_actions: Shape,
}

impl TryFrom<Vec<Player>> for NormalFormGame {
    type Error = GameError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Self::from_players(players)
    }
}

impl From<NormalFormGame> for Vec<Player> {
    fn from(game: NormalFormGame) -> Self {
        game.players
    }
}

impl NormalFormGame {
    /// Build a game from players whose tensors are consistently rotated.
    ///
    /// Player `i`'s action sizes must equal player 0's rotated by `i`.
    pub fn from_players(players: Vec<Player>) -> Result<Self, GameError> {
        let Some(first) = players.first() else {
            return Err(GameError::InvalidActionSizes { sizes: Vec::new() });
        };
        let num_players = players.len();
        let nums_actions: Shape = SmallVec::from_slice(first.action_sizes());

        for (i, player) in players.iter().enumerate() {
            if player.action_sizes().len() != num_players {
                return Err(GameError::RankMismatch {
                    player: i,
                    rank: player.action_sizes().len(),
                    num_players,
                });
            }
            let expected = rotated_shape(&nums_actions, i);
            if player.action_sizes() != expected.as_slice() {
                return Err(GameError::InconsistentShapes {
                    player: i,
                    expected: expected.to_vec(),
                    found: player.action_sizes().to_vec(),
                });
            }
        }

        log::debug!("built {num_players}-player game with action counts {nums_actions:?}");
        Ok(Self {
            players,
            nums_actions,
        })
    }

    /// Game from players already known to be rotation-consistent.
    pub(crate) fn new_unchecked(players: Vec<Player>) -> Self {
        let nums_actions = players
            .first()
            .map(|p| SmallVec::from_slice(p.action_sizes()))
            .unwrap_or_default();
        Self {
            players,
            nums_actions,
        }
    }

    /// All-zero game where player `i` has `nums_actions[i]` actions.
    ///
    /// A single entry gives a one-player game.
    pub fn zeros(nums_actions: &[usize]) -> Result<Self, GameError> {
        if nums_actions.is_empty() || nums_actions.contains(&0) {
            return Err(GameError::InvalidActionSizes {
                sizes: nums_actions.to_vec(),
            });
        }
        let players = (0..nums_actions.len())
            .map(|i| Player::new(PayoffArray::zeros(&rotated_shape(nums_actions, i))))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_players(players)
    }

    /// Symmetric two-player game: both players get `matrix`.
    pub fn symmetric(matrix: PayoffArray) -> Result<Self, GameError> {
        let shape = matrix.shape();
        if shape.len() != 2 || shape[0] != shape[1] {
            return Err(GameError::NonSquareMatrix {
                shape: shape.to_vec(),
            });
        }
        let column_player = Player::new(matrix.clone())?;
        Self::from_players(vec![Player::new(matrix)?, column_player])
    }

    /// Game from a payoff-profile tensor of shape `(n_0, ..., n_{N-1}, N)`.
    ///
    /// `profiles[a_0, ..., a_{N-1}, i]` is player `i`'s payoff at that
    /// action profile.
    pub fn from_payoff_profiles(profiles: PayoffArray) -> Result<Self, GameError> {
        let Some((&innermost, nums_actions)) = profiles.shape().split_last() else {
            return Err(GameError::ScalarPayoff);
        };
        let num_players = nums_actions.len();
        if innermost != num_players {
            return Err(GameError::ProfileAxisMismatch {
                expected: num_players,
                found: innermost,
            });
        }
        if nums_actions.contains(&0) {
            return Err(GameError::InvalidActionSizes {
                sizes: nums_actions.to_vec(),
            });
        }

        let players = (0..num_players)
            .map(|i| {
                let payoffs = PayoffArray::from_fn(&rotated_shape(nums_actions, i), |index| {
                    let mut global: Shape = smallvec![0; num_players + 1];
                    for (offset, &action) in index.iter().enumerate() {
                        global[rotated_position(i, offset, num_players)] = action;
                    }
                    global[num_players] = i;
                    profiles.data()[profiles.offset(&global)]
                });
                Player::new(payoffs)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_players(players)
    }

    /// Two-player game from rows of `(row player, column player)` payoffs.
    pub fn from_bimatrix(rows: Vec<Vec<(f64, f64)>>) -> Result<Self, GameError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(GameError::DataLength {
                shape: vec![1, cols, 2],
                expected: 2 * cols,
                found: 2 * row.len(),
            });
        }
        let shape = [rows.len(), cols, 2];
        let data = rows
            .into_iter()
            .flatten()
            .flat_map(|(row, col)| [row, col])
            .collect();
        Self::from_payoff_profiles(PayoffArray::new(&shape, data)?)
    }

    /// Apply `config` to every player.
    #[must_use]
    pub fn with_config(mut self, config: &PlayerConfig) -> Self {
        for player in &mut self.players {
            player.set_tolerance(config.tolerance);
        }
        self
    }

    /// Number of players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Number of actions of each player, in player order.
    #[must_use]
    pub fn nums_actions(&self) -> &[usize] {
        &self.nums_actions
    }

    /// All players, in player order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player `i`, if it exists.
    #[must_use]
    pub fn player(&self, i: usize) -> Option<&Player> {
        self.players.get(i)
    }

    /// Payoff of every player at a pure action profile.
    pub fn payoff_profile(&self, action_profile: &[usize]) -> Result<Vec<f64>, GameError> {
        self.check_profile_len(action_profile.len())?;
        self.players
            .iter()
            .enumerate()
            .map(|(i, player)| player.payoffs().get(&rotated_index(action_profile, i)))
            .collect()
    }

    /// Write `payoff_profile[i]` into player `i`'s tensor at `action_profile`.
    ///
    /// Every index is validated before the first write, so on error no
    /// tensor has changed.
    pub fn set_payoff_profile(
        &mut self,
        action_profile: &[usize],
        payoff_profile: &[f64],
    ) -> Result<(), GameError> {
        self.check_profile_len(action_profile.len())?;
        if payoff_profile.len() != self.num_players() {
            return Err(GameError::PayoffProfileLength {
                expected: self.num_players(),
                found: payoff_profile.len(),
            });
        }

        let offsets = self
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| player.payoffs().checked_offset(&rotated_index(action_profile, i)))
            .collect::<Result<SmallVec<[usize; 4]>, _>>()?;

        for ((player, offset), &payoff) in self.players.iter_mut().zip(offsets).zip(payoff_profile) {
            player.payoffs_mut().data_mut()[offset] = payoff;
        }
        Ok(())
    }

    /// True if every player's action is a best response to the others'.
    ///
    /// `action_profile[i]` is player `i`'s action. Stops at the first
    /// player that could gain by deviating.
    pub fn is_nash(&self, action_profile: &[Action]) -> Result<bool, GameError> {
        self.check_profile_len(action_profile.len())?;
        for (i, player) in self.players.iter().enumerate() {
            let own_action = &action_profile[i];
            if !player.is_best_response_to(own_action, opponents(action_profile, i))? {
                log::debug!("player {i} is not best-responding with {own_action:?}");
                return Ok(false);
            }
            log::trace!("player {i} best-responds with {own_action:?}");
        }
        Ok(true)
    }

    fn check_profile_len(&self, found: usize) -> Result<(), GameError> {
        if found != self.num_players() {
            return Err(GameError::ProfileLength {
                expected: self.num_players(),
                found,
            });
        }
        Ok(())
    }
}

impl fmt::Display for NormalFormGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, player) in self.players.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Payoff array of player {i}:\n{}", player.payoffs())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching_pennies() -> NormalFormGame {
        NormalFormGame::from_bimatrix(vec![
            vec![(1.0, -1.0), (-1.0, 1.0)],
            vec![(-1.0, 1.0), (1.0, -1.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_bimatrix_splits_players() {
        let game = matching_pennies();
        assert_eq!(game.num_players(), 2);
        assert_eq!(game.nums_actions(), &[2, 2]);
        assert_eq!(game.players()[0].payoffs().data(), &[1.0, -1.0, -1.0, 1.0]);
        assert_eq!(game.players()[1].payoffs().data(), &[-1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_from_bimatrix_transposes_column_player() {
        // Row player has 2 actions, column player 3.
        let game = NormalFormGame::from_bimatrix(vec![
            vec![(0.0, 1.0), (0.0, 2.0), (0.0, 3.0)],
            vec![(0.0, 4.0), (0.0, 5.0), (0.0, 6.0)],
        ])
        .unwrap();
        let column = game.player(1).unwrap();
        assert_eq!(column.action_sizes(), &[3, 2]);
        assert_eq!(column.payoffs().get(&[2, 1]).unwrap(), 6.0);
        assert_eq!(game.payoff_profile(&[1, 2]).unwrap(), vec![0.0, 6.0]);
    }

    #[test]
    fn test_zeros_shapes() {
        let game = NormalFormGame::zeros(&[2, 3, 4]).unwrap();
        assert_eq!(game.player(0).unwrap().action_sizes(), &[2, 3, 4]);
        assert_eq!(game.player(1).unwrap().action_sizes(), &[3, 4, 2]);
        assert_eq!(game.player(2).unwrap().action_sizes(), &[4, 2, 3]);
    }

    #[test]
    fn test_zeros_rejects_bad_sizes() {
        assert!(matches!(
            NormalFormGame::zeros(&[]),
            Err(GameError::InvalidActionSizes { .. })
        ));
        assert!(matches!(
            NormalFormGame::zeros(&[2, 0]),
            Err(GameError::InvalidActionSizes { .. })
        ));
    }

    #[test]
    fn test_one_player_game() {
        let mut game = NormalFormGame::zeros(&[3]).unwrap();
        game.set_payoff_profile(&[1], &[5.0]).unwrap();
        assert!(game.is_nash(&[Action::Pure(1)]).unwrap());
        assert!(!game.is_nash(&[Action::Pure(0)]).unwrap());
    }

    #[test]
    fn test_from_players_rejects_inconsistent_shapes() {
        let p0 = Player::new(PayoffArray::zeros(&[2, 3])).unwrap();
        let p1 = Player::new(PayoffArray::zeros(&[2, 3])).unwrap();
        assert_eq!(
            NormalFormGame::from_players(vec![p0, p1]),
            Err(GameError::InconsistentShapes {
                player: 1,
                expected: vec![3, 2],
                found: vec![2, 3],
            })
        );
    }

    #[test]
    fn test_from_players_rejects_wrong_rank() {
        let p0 = Player::new(PayoffArray::zeros(&[2, 2, 2])).unwrap();
        let p1 = Player::new(PayoffArray::zeros(&[2, 2, 2])).unwrap();
        assert_eq!(
            NormalFormGame::from_players(vec![p0, p1]),
            Err(GameError::RankMismatch { player: 0, rank: 3, num_players: 2 })
        );
        assert!(matches!(
            NormalFormGame::from_players(vec![]),
            Err(GameError::InvalidActionSizes { .. })
        ));
    }

    #[test]
    fn test_symmetric_requires_square() {
        let rect = PayoffArray::zeros(&[2, 3]);
        assert_eq!(
            NormalFormGame::symmetric(rect),
            Err(GameError::NonSquareMatrix { shape: vec![2, 3] })
        );
        assert!(matches!(
            NormalFormGame::symmetric(PayoffArray::zeros(&[2, 2, 2])),
            Err(GameError::NonSquareMatrix { .. })
        ));
    }

    #[test]
    fn test_payoff_profiles_trailing_axis() {
        assert_eq!(
            NormalFormGame::from_payoff_profiles(PayoffArray::zeros(&[2, 2, 3])),
            Err(GameError::ProfileAxisMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            NormalFormGame::from_payoff_profiles(PayoffArray::scalar(0.0)),
            Err(GameError::ScalarPayoff)
        );
    }

    #[test]
    fn test_set_then_get_profile() {
        let mut game = NormalFormGame::zeros(&[2, 2]).unwrap();
        game.set_payoff_profile(&[1, 1], &[-2.0, 0.0]).unwrap();

        assert_eq!(game.payoff_profile(&[1, 1]).unwrap(), vec![-2.0, 0.0]);
        for profile in [[0, 0], [0, 1], [1, 0]] {
            assert_eq!(game.payoff_profile(&profile).unwrap(), vec![0.0, 0.0]);
        }
    }

    #[test]
    fn test_profile_arity_errors() {
        let mut game = NormalFormGame::zeros(&[2, 2]).unwrap();
        assert_eq!(
            game.payoff_profile(&[0]),
            Err(GameError::ProfileLength { expected: 2, found: 1 })
        );
        assert_eq!(
            game.set_payoff_profile(&[0, 0, 0], &[1.0, 1.0]),
            Err(GameError::ProfileLength { expected: 2, found: 3 })
        );
        assert_eq!(
            game.set_payoff_profile(&[0, 0], &[1.0]),
            Err(GameError::PayoffProfileLength { expected: 2, found: 1 })
        );
        assert_eq!(
            game.is_nash(&[Action::Pure(0)]),
            Err(GameError::ProfileLength { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_failed_write_changes_nothing() {
        let mut game = NormalFormGame::zeros(&[2, 3]).unwrap();
        assert!(game.set_payoff_profile(&[1, 3], &[1.0, 1.0]).is_err());
        assert!(game
            .players()
            .iter()
            .all(|p| p.payoffs().data().iter().all(|&v| v == 0.0)));
    }

    #[test]
    fn test_with_config_sets_every_tolerance() {
        let game = matching_pennies().with_config(&PlayerConfig::default().with_tolerance(0.5));
        assert!(game.players().iter().all(|p| p.tolerance() == 0.5));
    }

    #[test]
    fn test_serde_round_trip_and_validation() {
        let game = matching_pennies();
        let json = serde_json::to_string(&game).unwrap();
        let back: NormalFormGame = serde_json::from_str(&json).unwrap();
        assert_eq!(game, back);

        let p0 = Player::new(PayoffArray::zeros(&[2, 3])).unwrap();
        let bad = serde_json::to_string(&vec![p0.clone(), p0]).unwrap();
        assert!(serde_json::from_str::<NormalFormGame>(&bad).is_err());
    }

    #[test]
    fn test_display_lists_players() {
        let text = matching_pennies().to_string();
        assert!(text.contains("Payoff array of player 0:\n[[1, -1], [-1, 1]]"));
        assert!(text.contains("Payoff array of player 1:\n[[-1, 1], [1, -1]]"));
    }
}
