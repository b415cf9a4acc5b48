//! Fixed-shape binary grids and their flattening into patterns.
//!
//! A [`Grid<R, C>`] is the boundary value of the crate: whatever reads grids
//! from the outside world (text, files, Python lists) produces one, and the
//! shape and content checks happen exactly once, here. After that the
//! numerical code assumes well-formed input.
//!
//! # Text format
//!
//! One grid row per non-blank line, cells as whitespace-separated `0` / `1`
//! tokens. Blank lines are ignored.
//!
//! ```text
//! 0 0 1 0 0
//! 0 1 0 1 0
//! ...
//! ```

use core::fmt;

use crate::error::FormatError;
use crate::pattern::Pattern;

/// Compile-time guard that a grid of `R × C` cells flattens into `N` units.
struct CellCount<const R: usize, const C: usize, const N: usize>;

impl<const R: usize, const C: usize, const N: usize> CellCount<R, C, N> {
    const MATCHES: () = assert!(R * C == N, "pattern length must equal rows × columns");
}

/// An `R × C` matrix of binary cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid<const R: usize, const C: usize> {
    cells: [[u8; C]; R],
}

impl<const R: usize, const C: usize> Grid<R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;
    /// Number of cells (`R × C`).
    pub const CELLS: usize = R * C;

    /// Build a grid from a cell array, rejecting any cell outside {0, 1}.
    pub fn new(cells: [[u8; C]; R]) -> Result<Self, FormatError> {
        for (row, line) in cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value > 1 {
                    return Err(FormatError::InvalidCell { row, col, value });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Build a grid without validation. Only for known-good constants.
    pub(crate) const fn from_cells_unchecked(cells: [[u8; C]; R]) -> Self {
        Self { cells }
    }

    /// Build a grid from dynamically sized rows.
    ///
    /// Requires exactly `R` rows of exactly `C` cells, each 0 or 1.
    pub fn from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Result<Self, FormatError> {
        if rows.len() != R {
            return Err(FormatError::RowCount {
                expected: R,
                found: rows.len(),
            });
        }
        let mut cells = [[0u8; C]; R];
        for (row, (dst, src)) in cells.iter_mut().zip(rows.iter()).enumerate() {
            let src = src.as_ref();
            if src.len() != C {
                return Err(FormatError::ColumnCount {
                    row,
                    expected: C,
                    found: src.len(),
                });
            }
            dst.copy_from_slice(src);
        }
        Self::new(cells)
    }

    /// Parse the whitespace-separated text format.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let found = text.lines().filter(|l| !l.trim().is_empty()).count();
        if found != R {
            return Err(FormatError::RowCount { expected: R, found });
        }

        let mut cells = [[0u8; C]; R];
        let lines = text.lines().filter(|l| !l.trim().is_empty());
        for (row, (dst, line)) in cells.iter_mut().zip(lines).enumerate() {
            let tokens = line.split_whitespace().count();
            if tokens != C {
                return Err(FormatError::ColumnCount {
                    row,
                    expected: C,
                    found: tokens,
                });
            }
            for (col, (cell, token)) in dst.iter_mut().zip(line.split_whitespace()).enumerate() {
                *cell = match token {
                    "0" => 0,
                    "1" => 1,
                    _ => return Err(FormatError::InvalidToken { row, col }),
                };
            }
        }
        Ok(Self { cells })
    }

    /// Decode a pattern back into a grid (`-1 ↦ 0`, `+1 ↦ 1`).
    ///
    /// `N` must equal `R × C`; a mismatch is rejected at compile time.
    pub fn from_pattern<const N: usize>(pattern: &Pattern<N>) -> Self {
        let () = CellCount::<R, C, N>::MATCHES;
        let bits = pattern.to_bits();
        let mut cells = [[0u8; C]; R];
        for (dst, src) in cells.iter_mut().flat_map(|r| r.iter_mut()).zip(bits.iter()) {
            *dst = *src;
        }
        Self { cells }
    }

    /// Cell array, row-major.
    pub fn cells(&self) -> &[[u8; C]; R] {
        &self.cells
    }

    /// Cell at (`row`, `col`), or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Concatenate rows in order into a flat binary vector of `N = R × C` cells.
    ///
    /// `N` must equal `R × C`; a mismatch is rejected at compile time.
    pub fn flatten<const N: usize>(&self) -> [u8; N] {
        let () = CellCount::<R, C, N>::MATCHES;
        let mut flat = [0u8; N];
        for (dst, src) in flat.iter_mut().zip(self.cells.iter().flat_map(|r| r.iter())) {
            *dst = *src;
        }
        flat
    }

    /// Flatten and encode as a bipolar pattern.
    pub fn to_pattern<const N: usize>(&self) -> Pattern<N> {
        Pattern::from_bits(&self.flatten::<N>())
    }
}

impl<const R: usize, const C: usize> fmt::Display for Grid<R, C> {
    /// Writes the text format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
