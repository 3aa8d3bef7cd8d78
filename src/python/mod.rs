//! Python bindings for rust-nfg.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import rust_nfg as nfg
//!
//! g = nfg.NormalFormGame.zeros([2, 2])
//! g[0, 0] = (0, 10)
//! g[1, 0] = (3, 5)
//! g.is_nash([1, 0])
//!
//! p = nfg.Player(np.array([[4.0, 0.0], [3.0, 2.0]]))
//! p.payoff_vector([0.5, 0.5])        # array([2. , 2.5])
//! p.best_response(0, tie_breaking=False)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_player;
mod py_game;

pub use py_core::*;
pub use py_player::*;
pub use py_game::*;

/// rust_nfg: normal-form games, best responses and Nash equilibrium checks.
#[pymodule]
fn rust_nfg(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyNormalFormGame>()?;
    m.add_function(wrap_pyfunction!(py_pure2mixed, m)?)?;
    Ok(())
}
