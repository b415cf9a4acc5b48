//! Loading grids from text files.
//!
//! Requires the `std` feature. The file format is the one accepted by
//! [`Grid::parse`]. Failures name the file and the expected shape.

use std::fs;
use std::path::{Path, PathBuf};
use std::vec::Vec;

use thiserror::Error;

use crate::error::FormatError;
use crate::grid::Grid;
use crate::pattern::Pattern;

/// A grid file could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not an `rows × cols` 0/1 grid.
    #[error("invalid format in {} (expected {rows}x{cols} grid): {source}", path.display())]
    Format {
        /// File that failed.
        path: PathBuf,
        /// Expected rows.
        rows: usize,
        /// Expected columns.
        cols: usize,
        /// What was wrong.
        #[source]
        source: FormatError,
    },
}

impl LoadError {
    /// File the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Format { path, .. } => path,
        }
    }
}

/// Read and parse one `R × C` grid file.
pub fn read_grid<const R: usize, const C: usize>(
    path: impl AsRef<Path>,
) -> Result<Grid<R, C>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = Grid::parse(&text).map_err(|source| LoadError::Format {
        path: path.to_path_buf(),
        rows: R,
        cols: C,
        source,
    })?;
    tracing::info!(path = %path.display(), rows = R, cols = C, "loaded grid");
    Ok(grid)
}

/// Load several grid files as patterns, in order. Stops at the first failure.
pub fn load_patterns<P: AsRef<Path>, const R: usize, const C: usize, const N: usize>(
    paths: &[P],
) -> Result<Vec<Pattern<N>>, LoadError> {
    paths
        .iter()
        .map(|p| read_grid::<R, C>(p).map(|g| g.to_pattern::<N>()))
        .collect()
}
