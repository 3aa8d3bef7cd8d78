//! Player bindings for Python.

use numpy::{PyArray1, PyArrayDyn, PyArrayMethods, PyReadonlyArrayDyn};
use pyo3::prelude::*;

use crate::core::GameRng;
use crate::normal_form::{BestResponse, Player};

use super::py_core::{array_to_payoffs, extract_opponents, parse_tie_breaking, PyActionArg};

/// Python wrapper for Player.
///
/// Owns the RNG used for random tie-breaking, seeded at construction.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer {
    pub(crate) inner: Player,
    rng: GameRng,
}

impl PyPlayer {
    pub(crate) fn wrap(inner: Player, seed: u64) -> Self {
        Self {
            inner,
            rng: GameRng::new(seed),
        }
    }
}

#[pymethods]
impl PyPlayer {
    /// Create a player from a float64 payoff array.
    #[new]
    #[pyo3(signature = (payoff_array, seed = 42))]
    fn new(payoff_array: PyReadonlyArrayDyn<'_, f64>, seed: u64) -> PyResult<Self> {
        let payoffs = array_to_payoffs(&payoff_array)?;
        Ok(Self::wrap(Player::new(payoffs)?, seed))
    }

    #[getter]
    fn payoff_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
        let payoffs = self.inner.payoffs();
        PyArray1::from_vec_bound(py, payoffs.data().to_vec()).reshape(payoffs.shape())
    }

    #[getter]
    fn num_actions(&self) -> usize {
        self.inner.num_actions()
    }

    #[getter]
    fn num_opponents(&self) -> usize {
        self.inner.num_opponents()
    }

    #[getter]
    fn action_sizes(&self) -> Vec<usize> {
        self.inner.action_sizes().to_vec()
    }

    #[getter]
    fn tol(&self) -> f64 {
        self.inner.tolerance()
    }

    #[setter]
    fn set_tol(&mut self, tol: f64) {
        self.inner.set_tolerance(tol);
    }

    /// Payoff of each own action against the opponents' actions.
    #[pyo3(signature = (opponents_actions = None))]
    fn payoff_vector<'py>(
        &self,
        py: Python<'py>,
        opponents_actions: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let opponents = extract_opponents(&self.inner, opponents_actions)?;
        Ok(PyArray1::from_vec_bound(py, self.inner.payoff_vector(&opponents)?))
    }

    /// True if `own_action` is a best response to the opponents' actions.
    #[pyo3(signature = (own_action, opponents_actions = None))]
    fn is_best_response(
        &self,
        own_action: PyActionArg,
        opponents_actions: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<bool> {
        let opponents = extract_opponents(&self.inner, opponents_actions)?;
        Ok(self.inner.is_best_response(&own_action.into(), &opponents)?)
    }

    /// Best response(s): an int for "first"/"random", an array for False/"all".
    #[pyo3(signature = (opponents_actions = None, tie_breaking = None))]
    fn best_response(
        &mut self,
        py: Python<'_>,
        opponents_actions: Option<&Bound<'_, PyAny>>,
        tie_breaking: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<PyObject> {
        let opponents = extract_opponents(&self.inner, opponents_actions)?;
        let tie_breaking = tie_breaking.map(parse_tie_breaking).transpose()?.unwrap_or_default();
        Ok(
            match self.inner.best_response(&opponents, tie_breaking, &mut self.rng)? {
                BestResponse::Action(action) => action.into_py(py),
                BestResponse::Actions(actions) => {
                    PyArray1::from_vec_bound(py, actions).into_any().unbind()
                }
            },
        )
    }

    /// A pure action chosen at random from `actions` (default: all actions).
    #[pyo3(signature = (actions = None))]
    fn random_choice(&mut self, actions: Option<Vec<usize>>) -> usize {
        self.inner.random_choice(actions.as_deref(), &mut self.rng)
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}
