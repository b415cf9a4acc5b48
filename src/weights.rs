/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Hebbian weight matrix: the summed outer products of the stored patterns.
//!
//! ```text
//! W = Σ_p  v_p · v_pᵗ        then   W[i][i] = 0
//! ```
//!
//! # Invariants
//!
//! - Symmetric: `W[i][j] == W[j][i]`.
//! - Zero diagonal, forced after accumulation (no self-reinforcement).
//! - `|W[i][j]| <= pattern_count()` for trained matrices.
//! - Order-independent and exactly reproducible: integer sums only.

use core::fmt;

use crate::error::WeightError;
use crate::pattern::Pattern;

/// `N × N` integer weight matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct WeightMatrix<const N: usize> {
    weights: [[i32; N]; N],
    /// Patterns accumulated by [`WeightMatrix::train`]; 0 for hand-built matrices.
    patterns: usize,
}

impl<const N: usize> WeightMatrix<N> {
    /// All-zero matrix. Every unit then holds its state forever.
    pub fn zeros() -> Self {
        Self {
            weights: [[0; N]; N],
            patterns: 0,
        }
    }

    /// Build the Hebbian matrix from a training set.
    ///
    /// An empty training set yields the all-zero matrix. That is degenerate
    /// but defined, and only logged as a warning.
    pub fn train(patterns: &[Pattern<N>]) -> Self {
        Self::train_iter(patterns)
    }

    /// [`WeightMatrix::train`] over any iterator of pattern references.
    pub fn train_iter<'a, I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = &'a Pattern<N>>,
    {
        let mut acc = Self::zeros();
        for pattern in patterns {
            acc.accumulate(pattern);
        }
        for (i, row) in acc.weights.iter_mut().enumerate() {
            row[i] = 0;
        }

        if acc.patterns == 0 {
            tracing::warn!(units = N, "empty training set; weight matrix is all zeros");
        } else {
            tracing::debug!(units = N, patterns = acc.patterns, "trained weight matrix");
        }
        acc
    }

    /// Add the outer product `v · vᵗ` into the accumulator.
    fn accumulate(&mut self, pattern: &Pattern<N>) {
        let v = pattern.values();
        for (row, &vi) in self.weights.iter_mut().zip(v.iter()) {
            for (w, &vj) in row.iter_mut().zip(v.iter()) {
                *w += i32::from(vi) * i32::from(vj);
            }
        }
        self.patterns += 1;
    }

    /// Use explicit weights, checking symmetry and the zero diagonal.
    pub fn from_rows(weights: [[i32; N]; N]) -> Result<Self, WeightError> {
        for i in 0..N {
            if weights[i][i] != 0 {
                return Err(WeightError::NonZeroDiagonal { index: i });
            }
            for j in (i + 1)..N {
                if weights[i][j] != weights[j][i] {
                    return Err(WeightError::NotSymmetric { row: i, col: j });
                }
            }
        }
        Ok(Self {
            weights,
            patterns: 0,
        })
    }

    /// Weight between units `i` and `j`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<i32> {
        self.weights.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Raw rows.
    pub fn rows(&self) -> &[[i32; N]; N] {
        &self.weights
    }

    /// Number of units.
    pub fn units(&self) -> usize {
        N
    }

    /// Number of training patterns summed into this matrix.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// `true` if `W[i][j] == W[j][i]` everywhere.
    pub fn is_symmetric(&self) -> bool {
        (0..N).all(|i| ((i + 1)..N).all(|j| self.weights[i][j] == self.weights[j][i]))
    }

    /// `true` if every self-connection is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        self.weights.iter().enumerate().all(|(i, row)| row[i] == 0)
    }

    /// Largest absolute weight.
    pub fn max_abs(&self) -> i32 {
        self.weights
            .iter()
            .flat_map(|row| row.iter())
            .map(|w| w.abs())
            .max()
            .unwrap_or(0)
    }

    /// Net input to every unit: `y[j] = Σ_i state[i] · W[i][j]`.
    pub fn activation(&self, state: &Pattern<N>) -> [i32; N] {
        let mut y = [0i32; N];
        for (&u, row) in state.values().iter().zip(self.weights.iter()) {
            let u = i32::from(u);
            for (yj, &w) in y.iter_mut().zip(row.iter()) {
                *yj += u * w;
            }
        }
        y
    }
}

impl<const N: usize> Default for WeightMatrix<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> fmt::Debug for WeightMatrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightMatrix")
            .field("units", &N)
            .field("patterns", &self.patterns)
            .field("max_abs", &self.max_abs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p4(values: [i8; 4]) -> Pattern<4> {
        Pattern::new(values).unwrap()
    }

    #[test]
    fn test_train_two_orthogonal_patterns() {
        let w = WeightMatrix::train(&[p4([1, 1, -1, -1]), p4([1, -1, 1, -1])]);
        assert_eq!(
            w.rows(),
            &[
                [0, 0, 0, -2],
                [0, 0, -2, 0],
                [0, -2, 0, 0],
                [-2, 0, 0, 0],
            ]
        );
        assert_eq!(w.pattern_count(), 2);
    }

    #[test]
    fn test_train_forces_zero_diagonal() {
        let w = WeightMatrix::train(&[p4([1, 1, 1, 1]), p4([-1, 1, -1, 1])]);
        assert!(w.has_zero_diagonal());
        assert!(w.is_symmetric());
    }

    #[test]
    fn test_empty_training_set_is_all_zero() {
        let w = WeightMatrix::<4>::train(&[]);
        assert_eq!(w, WeightMatrix::zeros());
        assert_eq!(w.pattern_count(), 0);
        assert_eq!(w.max_abs(), 0);
    }

    #[test]
    fn test_weights_bounded_by_pattern_count() {
        let set = [
            p4([1, 1, 1, 1]),
            p4([1, 1, 1, -1]),
            p4([1, 1, -1, -1]),
        ];
        let w = WeightMatrix::train(&set);
        assert_eq!(w.max_abs(), 3);
        assert_eq!(w.get(0, 1), Some(3));
        assert_eq!(w.get(0, 3), Some(-1));
        assert_eq!(w.get(2, 3), Some(1));
        assert_eq!(w.get(4, 0), None);
    }

    #[test]
    fn test_from_rows_rejects_asymmetry_and_self_connections() {
        let err = WeightMatrix::from_rows([[0, 1], [2, 0]]).unwrap_err();
        assert_eq!(err, WeightError::NotSymmetric { row: 0, col: 1 });
        let err = WeightMatrix::from_rows([[0, 1], [1, 5]]).unwrap_err();
        assert_eq!(err, WeightError::NonZeroDiagonal { index: 1 });
    }

    #[test]
    fn test_activation_is_state_times_matrix() {
        let w = WeightMatrix::from_rows([[0, 1, -1], [1, 0, 1], [-1, 1, 0]]).unwrap();
        let u = Pattern::new([-1, 1, 1]).unwrap();
        assert_eq!(w.activation(&u), [0, 0, 2]);
    }
}
