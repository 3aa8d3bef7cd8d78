//! Classic game definitions.

use crate::core::rotation::rotated_shape;
use crate::core::{GameError, GameRng, PayoffArray};
use crate::normal_form::{NormalFormGame, Player};

/// Two-player game from row and column payoff matrices, both indexed
/// `[row action][column action]`.
fn bimatrix<const R: usize, const C: usize>(
    row: [[f64; C]; R],
    column: [[f64; C]; R],
) -> NormalFormGame {
    let row_player = Player::new_unchecked(PayoffArray::from_fn(&[R, C], |i| row[i[0]][i[1]]));
    let column_player =
        Player::new_unchecked(PayoffArray::from_fn(&[C, R], |i| column[i[1]][i[0]]));
    NormalFormGame::new_unchecked(vec![row_player, column_player])
}

/// Symmetric two-player game where both players get `matrix[own][other]`.
fn symmetric<const K: usize>(matrix: [[f64; K]; K]) -> NormalFormGame {
    let player = || Player::new_unchecked(PayoffArray::from_fn(&[K, K], |i| matrix[i[0]][i[1]]));
    NormalFormGame::new_unchecked(vec![player(), player()])
}

/// Matching pennies: the row player wins on a match, the column player on
/// a mismatch. The only equilibrium is both players mixing 50/50.
#[must_use]
pub fn matching_pennies() -> NormalFormGame {
    bimatrix(
        [[1.0, -1.0], [-1.0, 1.0]],
        [[-1.0, 1.0], [1.0, -1.0]],
    )
}

/// Symmetric coordination game with payoff matrix `[[4, 0], [3, 2]]`.
///
/// Pure equilibria at `(0, 0)` and `(1, 1)`.
#[must_use]
pub fn coordination_game() -> NormalFormGame {
    symmetric([[4.0, 0.0], [3.0, 2.0]])
}

/// Prisoner's dilemma; action 0 cooperates, action 1 defects.
///
/// Mutual defection is the unique equilibrium.
#[must_use]
pub fn prisoners_dilemma() -> NormalFormGame {
    symmetric([[-1.0, -3.0], [0.0, -2.0]])
}

/// Rock-paper-scissors (0 = rock, 1 = paper, 2 = scissors).
#[must_use]
pub fn rock_paper_scissors() -> NormalFormGame {
    symmetric([[0.0, -1.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 1.0, 0.0]])
}

/// N-player game where everyone earns 1 if all players pick the same
/// action and 0 otherwise.
pub fn unanimity_game(num_players: usize, num_actions: usize) -> Result<NormalFormGame, GameError> {
    if num_players == 0 || num_actions == 0 {
        return Err(GameError::InvalidActionSizes {
            sizes: vec![num_actions; num_players],
        });
    }
    let shape = vec![num_actions; num_players];
    let unanimous = |index: &[usize]| {
        if index.iter().all(|&a| a == index[0]) {
            1.0
        } else {
            0.0
        }
    };
    let players = (0..num_players)
        .map(|_| Player::new(PayoffArray::from_fn(&shape, unanimous)))
        .collect::<Result<Vec<_>, _>>()?;
    NormalFormGame::from_players(players)
}

/// Game with independent uniform `[0, 1)` payoffs.
pub fn random_game(nums_actions: &[usize], rng: &mut GameRng) -> Result<NormalFormGame, GameError> {
    if nums_actions.is_empty() || nums_actions.contains(&0) {
        return Err(GameError::InvalidActionSizes {
            sizes: nums_actions.to_vec(),
        });
    }
    let players = (0..nums_actions.len())
        .map(|i| {
            let shape = rotated_shape(nums_actions, i);
            Player::new(PayoffArray::from_fn(&shape, |_| rng.gen_f64()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    NormalFormGame::from_players(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use crate::normal_form::pure_nash_brute;

    #[test]
    fn test_classic_games_pass_validation() {
        for game in [
            matching_pennies(),
            coordination_game(),
            prisoners_dilemma(),
            rock_paper_scissors(),
        ] {
            let rebuilt = NormalFormGame::from_players(game.players().to_vec()).unwrap();
            assert_eq!(rebuilt, game);
        }
    }

    #[test]
    fn test_matching_pennies_layout() {
        let game = matching_pennies();
        assert_eq!(game.payoff_profile(&[0, 0]).unwrap(), vec![1.0, -1.0]);
        assert_eq!(game.payoff_profile(&[0, 1]).unwrap(), vec![-1.0, 1.0]);
    }

    #[test]
    fn test_rock_paper_scissors_uniform_equilibrium() {
        let game = rock_paper_scissors();
        let uniform = Action::Mixed(vec![1.0 / 3.0; 3]);
        assert!(game.is_nash(&[uniform.clone(), uniform]).unwrap());
        assert!(pure_nash_brute(&game).is_empty());
    }

    #[test]
    fn test_unanimity_game() {
        let game = unanimity_game(3, 2).unwrap();
        assert_eq!(game.payoff_profile(&[1, 1, 1]).unwrap(), vec![1.0; 3]);
        assert_eq!(game.payoff_profile(&[1, 0, 1]).unwrap(), vec![0.0; 3]);
        assert_eq!(pure_nash_brute(&game).len(), 2);

        assert!(unanimity_game(0, 2).is_err());
        assert!(unanimity_game(2, 0).is_err());
    }

    #[test]
    fn test_random_game_is_seeded() {
        let game1 = random_game(&[2, 3, 2], &mut GameRng::new(8)).unwrap();
        let game2 = random_game(&[2, 3, 2], &mut GameRng::new(8)).unwrap();
        assert_eq!(game1, game2);
        assert_eq!(game1.nums_actions(), &[2, 3, 2]);
        assert!(game1
            .players()
            .iter()
            .flat_map(|p| p.payoffs().data())
            .all(|v| (0.0..1.0).contains(v)));
    }
}
