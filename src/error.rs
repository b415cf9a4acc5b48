//! Error types for the boundary of the Hopfield core.
//!
//! The numerical engine never fails. Every check happens once, where data
//! enters the crate: when a grid is built from rows or text, when a pattern is
//! built from raw components, when a weight matrix is built by hand, and when a
//! pattern is stored in a bounded [`crate::network::HopfieldNetwork`].

use thiserror::Error;

/// A grid or pattern does not have the expected shape or content.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Wrong number of (non-blank) rows.
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Rows the grid type declares.
        expected: usize,
        /// Rows actually supplied.
        found: usize,
    },

    /// A row has the wrong number of cells.
    #[error("row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        /// Zero-based row index.
        row: usize,
        /// Columns the grid type declares.
        expected: usize,
        /// Cells actually present in the row.
        found: usize,
    },

    /// A numeric cell outside {0, 1}.
    #[error("row {row}, column {col}: cell must be 0 or 1, found {value}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// Offending value.
        value: u8,
    },

    /// A text token that is not `0` or `1`.
    #[error("row {row}, column {col}: token is not a 0/1 cell")]
    InvalidToken {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// A pattern component outside {-1, +1}.
    #[error("component {index} must be -1 or +1, found {value}")]
    InvalidComponent {
        /// Position in the flat vector.
        index: usize,
        /// Offending value.
        value: i8,
    },

    /// A flat vector has the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    Length {
        /// Components the pattern type declares.
        expected: usize,
        /// Components actually supplied.
        found: usize,
    },
}

/// A hand-built weight matrix violates the Hopfield structure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightError {
    /// `W[row][col] != W[col][row]`.
    #[error("weight matrix is not symmetric at ({row}, {col})")]
    NotSymmetric {
        /// Row of the first mismatching entry.
        row: usize,
        /// Column of the first mismatching entry.
        col: usize,
    },

    /// A self-connection is non-zero.
    #[error("self-connection W[{index}][{index}] must be zero")]
    NonZeroDiagonal {
        /// Unit with a self-connection.
        index: usize,
    },
}

/// Storing a pattern in a bounded network failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// Every slot of the network is taken.
    #[error("network is full ({capacity} patterns)")]
    Capacity {
        /// Maximum number of stored patterns.
        capacity: usize,
    },

    /// Label longer than [`crate::network::LABEL_CAPACITY`] bytes.
    #[error("label exceeds {max} bytes")]
    LabelTooLong {
        /// Maximum label length in bytes.
        max: usize,
    },

    /// The pattern could not be encoded.
    #[error(transparent)]
    Format(#[from] FormatError),
}
