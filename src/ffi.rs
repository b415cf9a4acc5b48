//! Python FFI bindings via PyO3.
//!
//! Exposes the labelled network on the reference 8×5 grid shape.
//! For other grid sizes use the Rust API directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from hopfield_core import HopfieldNetwork
//!
//! net = HopfieldNetwork.with_reference_shapes()
//! probe = [[0, 0, 1, 0, 0],
//!          [0, 1, 0, 1, 0],
//!          [1, 0, 0, 0, 1],
//!          [1, 0, 0, 1, 1],
//!          [1, 0, 0, 0, 1],
//!          [0, 0, 0, 0, 1],
//!          [0, 1, 0, 1, 0],
//!          [0, 0, 1, 0, 0]]
//! result = net.recall(probe, max_iterations=50, trace=True)
//! print(result.converged, result.iterations, result.label)  # True 2 rhombus
//! ```

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::grid::Grid;
use crate::io::{read_grid, LoadError};
use crate::network::HopfieldNetwork;
use crate::pattern::Pattern;
use crate::recall::{RecallConfig, DEFAULT_MAX_ITERATIONS};
use crate::shapes::{self, CELLS, COLS, ROWS};
use crate::trace::RecallTrace;

/// Patterns a Python-side network can hold.
const PY_CAPACITY: usize = 16;

type PyGrid = Grid<ROWS, COLS>;

fn rows_to_pattern(rows: &[Vec<u8>]) -> PyResult<Pattern<CELLS>> {
    let grid = PyGrid::from_rows(rows).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(grid.to_pattern())
}

fn load_error_to_py(err: LoadError) -> PyErr {
    match err {
        LoadError::Io { .. } => PyIOError::new_err(err.to_string()),
        LoadError::Format { .. } => PyValueError::new_err(err.to_string()),
    }
}

// ── RecallResult ──────────────────────────────────────────────────────────────

/// Result of one recall.
#[pyclass(name = "RecallResult")]
#[derive(Clone)]
pub struct PyRecallResult {
    state: Vec<i8>,
    converged: bool,
    iterations: usize,
    label: Option<String>,
    distance: Option<usize>,
    frames: Vec<Vec<i8>>,
}

#[pymethods]
impl PyRecallResult {
    /// Final state as 40 values in {-1, 1}, row-major.
    #[getter]
    pub fn state(&self) -> Vec<i8> {
        self.state.clone()
    }

    /// Final state as 8 rows of 5 cells in {0, 1}.
    #[getter]
    pub fn grid(&self) -> Vec<Vec<u8>> {
        self.state
            .chunks(COLS)
            .map(|row| row.iter().map(|&v| u8::from(v > 0)).collect())
            .collect()
    }

    /// True if a fixed point was reached, False if the iteration cap stopped recall.
    #[getter]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of synchronous transitions performed.
    #[getter]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Label of the nearest stored pattern, if any are stored.
    #[getter]
    pub fn label(&self) -> Option<String> {
        self.label.clone()
    }

    /// Hamming distance to the nearest stored pattern.
    #[getter]
    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    /// Input and every iterate, if recall ran with `trace=True`.
    #[getter]
    pub fn frames(&self) -> Vec<Vec<i8>> {
        self.frames.clone()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "RecallResult(converged={}, iterations={}, label={:?}, distance={:?})",
            if self.converged { "True" } else { "False" },
            self.iterations,
            self.label,
            self.distance,
        )
    }
}

// ── HopfieldNetwork ───────────────────────────────────────────────────────────

/// Labelled Hopfield network over 8×5 binary grids.
///
/// Grids are lists of 8 rows, each a list of 5 ints in {0, 1}.
#[pyclass(name = "HopfieldNetwork")]
pub struct PyHopfieldNetwork {
    inner: HopfieldNetwork<CELLS, PY_CAPACITY>,
}

#[pymethods]
impl PyHopfieldNetwork {
    /// Create an empty network.
    #[new]
    pub fn new() -> Self {
        Self {
            inner: HopfieldNetwork::new(),
        }
    }

    /// Network preloaded with the six reference shapes.
    #[staticmethod]
    pub fn with_reference_shapes() -> PyResult<Self> {
        let mut inner = HopfieldNetwork::new();
        for shape in shapes::Shape::ALL {
            inner
                .store_grid(shape.name(), &shape.grid())
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
        }
        Ok(Self { inner })
    }

    /// Store a grid under `label`, replacing any pattern with the same label.
    pub fn store(&mut self, label: &str, rows: Vec<Vec<u8>>) -> PyResult<()> {
        self.inner
            .store_rows::<_, ROWS, COLS>(label, &rows)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(())
    }

    /// Load a grid file and store it under `label`.
    pub fn load(&mut self, label: &str, path: &str) -> PyResult<()> {
        let grid: PyGrid = read_grid(path).map_err(load_error_to_py)?;
        self.inner
            .store_grid(label, &grid)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(())
    }

    /// Remove the pattern stored under `label`. Returns True if it existed.
    pub fn remove(&mut self, label: &str) -> bool {
        self.inner.remove(label).is_some()
    }

    /// Stored labels, in insertion order.
    pub fn labels(&self) -> Vec<String> {
        self.inner.iter().map(|(l, _)| l.to_string()).collect()
    }

    /// The trained 40×40 weight matrix.
    pub fn weights(&self) -> Vec<Vec<i32>> {
        self.inner
            .weights()
            .rows()
            .iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Recall a (possibly noisy) grid.
    ///
    /// Args:
    ///     rows:           8 rows of 5 ints in {0, 1}
    ///     max_iterations: cap on synchronous transitions (default 50)
    ///     trace:          record the input and every iterate in `frames`
    #[pyo3(signature = (rows, max_iterations=DEFAULT_MAX_ITERATIONS, trace=false))]
    pub fn recall(
        &self,
        rows: Vec<Vec<u8>>,
        max_iterations: usize,
        trace: bool,
    ) -> PyResult<PyRecallResult> {
        let probe = rows_to_pattern(&rows)?;
        let mut config = RecallConfig::new(max_iterations);
        config.emit_intermediate = trace;

        let mut recorded = RecallTrace::new();
        let out = self.inner.recall_observed(&probe, &config, &mut recorded);
        let nearest = self.inner.identify(&out.state);

        Ok(PyRecallResult {
            state: out.state.values().to_vec(),
            converged: out.is_converged(),
            iterations: out.iterations,
            label: nearest.map(|m| m.label.to_string()),
            distance: nearest.map(|m| m.distance),
            frames: recorded.states().map(|s| s.values().to_vec()).collect(),
        })
    }

    /// Number of stored patterns.
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "HopfieldNetwork(patterns={}, capacity={})",
            self.inner.len(),
            self.inner.capacity()
        )
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Discrete Hopfield associative memory over 8×5 binary grids.
#[pymodule]
pub fn hopfield_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHopfieldNetwork>()?;
    m.add_class::<PyRecallResult>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("ROWS", ROWS)?;
    m.add("COLS", COLS)?;
    Ok(())
}
