//! Brute-force search for pure-action Nash equilibria.

use crate::core::{Action, Indices, Shape};

use super::game::NormalFormGame;

/// Every pure action profile of `game` that is a Nash equilibrium.
///
/// Profiles are listed in row-major order of `game.nums_actions()`.
///
/// ```
/// use rust_nfg::games;
/// use rust_nfg::normal_form::pure_nash_brute;
///
/// let equilibria = pure_nash_brute(&games::coordination_game());
/// let equilibria: Vec<Vec<usize>> = equilibria.iter().map(|p| p.to_vec()).collect();
/// assert_eq!(equilibria, vec![vec![0, 0], vec![1, 1]]);
/// ```
#[must_use]
pub fn pure_nash_brute(game: &NormalFormGame) -> Vec<Shape> {
    let equilibria: Vec<Shape> = Indices::new(game.nums_actions())
        .filter(|profile| matches!(game.is_nash(&Action::pure_profile(profile)), Ok(true)))
        .collect();
    log::debug!(
        "found {} pure Nash equilibria among {} profiles",
        equilibria.len(),
        game.nums_actions().iter().product::<usize>()
    );
    equilibria
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PayoffArray;

    #[test]
    fn test_prisoners_dilemma_has_one_equilibrium() {
        let game = NormalFormGame::symmetric(
            PayoffArray::from_matrix(vec![vec![-1.0, -3.0], vec![0.0, -2.0]]).unwrap(),
        )
        .unwrap();
        let found = pure_nash_brute(&game);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_slice(), &[1, 1]);
    }

    #[test]
    fn test_constant_game_every_profile_is_equilibrium() {
        let game = NormalFormGame::zeros(&[2, 3, 2]).unwrap();
        assert_eq!(pure_nash_brute(&game).len(), 12);
    }
}
