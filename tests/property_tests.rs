//! Property tests for payoff reduction and best responses.

use proptest::prelude::*;

use rust_nfg::core::rotation::opponents;
use rust_nfg::core::{pure2mixed, Action, GameRng, PayoffArray};
use rust_nfg::normal_form::{BestResponse, NormalFormGame, Player, TieBreaking};

/// Games with 1-4 players, 1-3 actions each, small integer payoffs.
fn game_strategy() -> impl Strategy<Value = NormalFormGame> {
    prop::collection::vec(1usize..=3, 1..=4).prop_flat_map(|nums_actions| {
        let num_players = nums_actions.len();
        let len = nums_actions.iter().product::<usize>() * num_players;
        prop::collection::vec((-10i32..=10).prop_map(f64::from), len).prop_map(move |data| {
            let mut shape = nums_actions.clone();
            shape.push(num_players);
            NormalFormGame::from_payoff_profiles(PayoffArray::new(&shape, data).unwrap()).unwrap()
        })
    })
}

/// A game together with a pure action profile inside it.
fn game_and_profile() -> impl Strategy<Value = (NormalFormGame, Vec<usize>)> {
    game_strategy().prop_flat_map(|game| {
        let ranges: Vec<_> = game.nums_actions().iter().map(|&n| 0..n).collect();
        (Just(game), ranges)
    })
}

fn rotated_opponents(profile: &[usize], player: usize) -> Vec<Action> {
    opponents(profile, player).map(|&a| Action::Pure(a)).collect()
}

proptest! {
    #[test]
    fn no_opponents_returns_tensor(values in prop::collection::vec(-100.0f64..100.0, 1..6)) {
        let player = Player::new(PayoffArray::from_vector(values.clone())).unwrap();
        prop_assert_eq!(player.payoff_vector(&[]).unwrap(), values.clone());
        prop_assert_eq!(player.payoff_vector(&[Action::Pure(0)]).unwrap(), values);
    }

    #[test]
    fn pure_reduction_matches_direct_lookup((game, profile) in game_and_profile()) {
        for (i, player) in game.players().iter().enumerate() {
            let vector = player.payoff_vector(&rotated_opponents(&profile, i)).unwrap();
            prop_assert_eq!(vector.len(), player.num_actions());
            for own in 0..player.num_actions() {
                let mut deviated = profile.clone();
                deviated[i] = own;
                prop_assert_eq!(vector[own], game.payoff_profile(&deviated).unwrap()[i]);
            }
        }
    }

    #[test]
    fn one_hot_reduction_matches_pure((game, profile) in game_and_profile()) {
        let nums_actions = game.nums_actions();
        for (i, player) in game.players().iter().enumerate() {
            let mixed: Vec<Action> = (1..game.num_players())
                .map(|offset| {
                    let j = (i + offset) % game.num_players();
                    Action::Mixed(pure2mixed(nums_actions[j], profile[j]).unwrap())
                })
                .collect();
            prop_assert_eq!(
                player.payoff_vector(&mixed).unwrap(),
                player.payoff_vector(&rotated_opponents(&profile, i)).unwrap()
            );
        }
    }

    #[test]
    fn best_response_policies_agree((game, profile) in game_and_profile(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for (i, player) in game.players().iter().enumerate() {
            let opponents_actions = rotated_opponents(&profile, i);
            let vector = player.payoff_vector(&opponents_actions).unwrap();
            let max = vector.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            let all = player
                .best_response(&opponents_actions, TieBreaking::All, &mut rng)
                .unwrap();
            let BestResponse::Actions(all) = all else {
                return Err(TestCaseError::fail("expected every best response"));
            };
            prop_assert!(!all.is_empty());
            prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(all.iter().all(|&a| vector[a] >= max - player.tolerance()));

            let first = player
                .best_response(&opponents_actions, TieBreaking::First, &mut rng)
                .unwrap();
            prop_assert_eq!(first, BestResponse::Action(all[0]));

            let random = player
                .best_response(&opponents_actions, TieBreaking::Random, &mut rng)
                .unwrap();
            prop_assert!(random.action().is_some_and(|a| all.contains(&a)));
        }
    }

    #[test]
    fn is_best_response_matches_best_response_set((game, profile) in game_and_profile()) {
        for (i, player) in game.players().iter().enumerate() {
            let opponents_actions = rotated_opponents(&profile, i);
            let best = player.best_responses(&opponents_actions).unwrap();
            for own in 0..player.num_actions() {
                prop_assert_eq!(
                    player.is_best_response(&Action::Pure(own), &opponents_actions).unwrap(),
                    best.contains(&own)
                );
            }
        }
    }

    #[test]
    fn is_nash_agrees_with_per_player_checks((game, profile) in game_and_profile()) {
        let actions = Action::pure_profile(&profile);
        let expected = game.players().iter().enumerate().all(|(i, player)| {
            player
                .is_best_response(&actions[i], &rotated_opponents(&profile, i))
                .unwrap()
        });
        prop_assert_eq!(game.is_nash(&actions).unwrap(), expected);
    }

    #[test]
    fn write_then_read_round_trips(
        (game, profile) in game_and_profile(),
        value in -50i32..50,
    ) {
        let mut game = game;
        let payoffs: Vec<f64> = (0..game.num_players()).map(|i| f64::from(value) + i as f64).collect();
        game.set_payoff_profile(&profile, &payoffs).unwrap();
        prop_assert_eq!(game.payoff_profile(&profile).unwrap(), payoffs);
        prop_assert!(NormalFormGame::from_players(game.players().to_vec()).is_ok());
    }
}
