//! Shared conversions between Python values and core types.

use numpy::{PyArray1, PyReadonlyArrayDyn};
use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBool;

use crate::core::{pure2mixed, Action, GameError, PayoffArray};
use crate::normal_form::{Player, TieBreaking};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> PyErr {
        match err {
            GameError::ProfileLength { .. }
            | GameError::PayoffProfileLength { .. }
            | GameError::IndexArity { .. }
            | GameError::IndexOutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// An action as passed from Python: an int (pure) or a sequence of floats (mixed).
#[derive(FromPyObject, Clone, Debug)]
pub enum PyActionArg {
    Pure(usize),
    Mixed(Vec<f64>),
}

impl From<PyActionArg> for Action {
    fn from(arg: PyActionArg) -> Self {
        match arg {
            PyActionArg::Pure(a) => Action::Pure(a),
            PyActionArg::Mixed(probs) => Action::Mixed(probs),
        }
    }
}

/// Read a float64 numpy array into a `PayoffArray`.
pub(crate) fn array_to_payoffs(array: &PyReadonlyArrayDyn<'_, f64>) -> PyResult<PayoffArray> {
    let view = array.as_array();
    let data: Vec<f64> = view.iter().copied().collect();
    Ok(PayoffArray::new(view.shape(), data)?)
}

/// Opponents' actions in the shape Python callers use: nothing with no
/// opponents, a single action with one, a sequence otherwise.
pub(crate) fn extract_opponents(
    player: &Player,
    opponents_actions: Option<&Bound<'_, PyAny>>,
) -> PyResult<Vec<Action>> {
    if player.num_opponents() == 0 {
        return Ok(Vec::new());
    }
    let Some(obj) = opponents_actions else {
        return Err(PyTypeError::new_err("opponents_actions is required"));
    };
    if player.num_opponents() == 1 {
        return Ok(vec![obj.extract::<PyActionArg>()?.into()]);
    }
    Ok(obj
        .extract::<Vec<PyActionArg>>()?
        .into_iter()
        .map(Action::from)
        .collect())
}

/// Accept `"first"`, `"random"`, `"all"` or `False`.
pub(crate) fn parse_tie_breaking(obj: &Bound<'_, PyAny>) -> PyResult<TieBreaking> {
    if let Ok(flag) = obj.downcast::<PyBool>() {
        if flag.is_true() {
            return Err(GameError::UnknownTieBreaking("True".into()).into());
        }
        return Ok(TieBreaking::All);
    }
    Ok(obj.extract::<String>()?.parse::<TieBreaking>()?)
}

/// Convert a pure action to the corresponding one-hot mixed action.
#[pyfunction]
#[pyo3(name = "pure2mixed")]
pub fn py_pure2mixed<'py>(
    py: Python<'py>,
    num_actions: usize,
    action: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(PyArray1::from_vec_bound(py, pure2mixed(num_actions, action)?))
}
