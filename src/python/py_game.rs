//! Game bindings for Python.

use numpy::PyReadonlyArrayDyn;
use pyo3::prelude::*;

use crate::core::Action;
use crate::normal_form::NormalFormGame;

use super::py_core::{array_to_payoffs, PyActionArg};
use super::py_player::PyPlayer;

/// Python wrapper for NormalFormGame.
///
/// Supports `g[profile]` reads and `g[profile] = payoffs` writes.
#[pyclass(name = "NormalFormGame")]
#[derive(Clone, Debug)]
pub struct PyNormalFormGame {
    inner: NormalFormGame,
}

#[pymethods]
impl PyNormalFormGame {
    /// Create a game from a payoff-profile array of shape (n_0, ..., n_{N-1}, N).
    #[new]
    fn new(payoff_profiles: PyReadonlyArrayDyn<'_, f64>) -> PyResult<Self> {
        let profiles = array_to_payoffs(&payoff_profiles)?;
        Ok(Self {
            inner: NormalFormGame::from_payoff_profiles(profiles)?,
        })
    }

    /// All-zero game with the given number of actions per player.
    #[staticmethod]
    fn zeros(nums_actions: Vec<usize>) -> PyResult<Self> {
        Ok(Self {
            inner: NormalFormGame::zeros(&nums_actions)?,
        })
    }

    /// Symmetric two-player game from a square matrix.
    #[staticmethod]
    fn symmetric(matrix: PyReadonlyArrayDyn<'_, f64>) -> PyResult<Self> {
        Ok(Self {
            inner: NormalFormGame::symmetric(array_to_payoffs(&matrix)?)?,
        })
    }

    /// Game from consistently shaped players.
    #[staticmethod]
    fn from_players(players: Vec<PyRef<'_, PyPlayer>>) -> PyResult<Self> {
        let players = players.iter().map(|p| p.inner.clone()).collect();
        Ok(Self {
            inner: NormalFormGame::from_players(players)?,
        })
    }

    #[getter(N)]
    fn num_players(&self) -> usize {
        self.inner.num_players()
    }

    #[getter]
    fn nums_actions(&self) -> Vec<usize> {
        self.inner.nums_actions().to_vec()
    }

    /// Copies of the players; tie-break RNGs are seeded with the player index.
    #[getter]
    fn players(&self) -> Vec<PyPlayer> {
        self.inner
            .players()
            .iter()
            .enumerate()
            .map(|(i, p)| PyPlayer::wrap(p.clone(), i as u64))
            .collect()
    }

    fn __getitem__(&self, action_profile: Vec<usize>) -> PyResult<Vec<f64>> {
        Ok(self.inner.payoff_profile(&action_profile)?)
    }

    fn __setitem__(&mut self, action_profile: Vec<usize>, payoff_profile: Vec<f64>) -> PyResult<()> {
        Ok(self.inner.set_payoff_profile(&action_profile, &payoff_profile)?)
    }

    /// True if the action profile is a Nash equilibrium.
    fn is_nash(&self, action_profile: Vec<PyActionArg>) -> PyResult<bool> {
        let profile: Vec<Action> = action_profile.into_iter().map(Action::from).collect();
        Ok(self.inner.is_nash(&profile)?)
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}
