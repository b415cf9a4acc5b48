/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Bounded, labelled associative memory.
//!
//! [`HopfieldNetwork`] keeps up to `P` named patterns alongside the weight
//! matrix trained from exactly that set. Any change to the set retrains the
//! matrix from scratch.
//!
//! Storage is `heapless` and needs no allocator. `P` must be a power of two
//! greater than one (an `FnvIndexMap` requirement).
//!
//! # Identification
//!
//! Recall returns a state, not a name. [`HopfieldNetwork::identify`] maps a
//! state back to the nearest stored label by Hamming distance, which also
//! reports spurious attractors as a non-zero distance.

use heapless::{FnvIndexMap, String};

use crate::error::NetworkError;
use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::recall::{RecallConfig, RecallObserver, RecallOutcome, RelaxationEngine};
use crate::weights::WeightMatrix;

/// Maximum label length in bytes.
pub const LABEL_CAPACITY: usize = 32;

/// Pattern label.
pub type Label = String<LABEL_CAPACITY>;

fn make_label(text: &str) -> Result<Label, NetworkError> {
    let mut label = Label::new();
    label.push_str(text).map_err(|_| NetworkError::LabelTooLong {
        max: LABEL_CAPACITY,
    })?;
    Ok(label)
}

/// Nearest stored pattern to a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// Label of the nearest stored pattern.
    pub label: &'a str,
    /// Units that differ between the state and that pattern.
    pub distance: usize,
}

impl PatternMatch<'_> {
    /// `true` if the state equals the stored pattern.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Up to `P` labelled patterns of `N` units and their Hebbian weight matrix.
pub struct HopfieldNetwork<const N: usize, const P: usize> {
    patterns: FnvIndexMap<Label, Pattern<N>, P>,
    weights: WeightMatrix<N>,
}

impl<const N: usize, const P: usize> HopfieldNetwork<N, P> {
    /// Empty network. Its weight matrix is all zeros.
    pub fn new() -> Self {
        Self {
            patterns: FnvIndexMap::new(),
            weights: WeightMatrix::zeros(),
        }
    }

    /// Store `pattern` under `label` and retrain.
    ///
    /// Re-using a label replaces its pattern and returns the old one.
    pub fn store(
        &mut self,
        label: &str,
        pattern: Pattern<N>,
    ) -> Result<Option<Pattern<N>>, NetworkError> {
        let key = make_label(label)?;
        let previous = self
            .patterns
            .insert(key, pattern)
            .map_err(|_| NetworkError::Capacity { capacity: P })?;
        self.retrain();
        tracing::debug!(label, stored = self.patterns.len(), "stored pattern");
        Ok(previous)
    }

    /// Store a grid under `label`.
    pub fn store_grid<const R: usize, const C: usize>(
        &mut self,
        label: &str,
        grid: &Grid<R, C>,
    ) -> Result<Option<Pattern<N>>, NetworkError> {
        self.store(label, grid.to_pattern::<N>())
    }

    /// Store dynamically sized rows, validated as an `R × C` grid.
    pub fn store_rows<T: AsRef<[u8]>, const R: usize, const C: usize>(
        &mut self,
        label: &str,
        rows: &[T],
    ) -> Result<Option<Pattern<N>>, NetworkError> {
        let grid = Grid::<R, C>::from_rows(rows)?;
        self.store_grid(label, &grid)
    }

    /// Remove the pattern stored under `label` and retrain.
    pub fn remove(&mut self, label: &str) -> Option<Pattern<N>> {
        let key = make_label(label).ok()?;
        let removed = self.patterns.remove(&key);
        if removed.is_some() {
            self.retrain();
        }
        removed
    }

    fn retrain(&mut self) {
        self.weights = WeightMatrix::train_iter(self.patterns.values());
    }

    /// Pattern stored under `label`.
    pub fn pattern(&self, label: &str) -> Option<&Pattern<N>> {
        let key = make_label(label).ok()?;
        self.patterns.get(&key)
    }

    /// Stored `(label, pattern)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pattern<N>)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stored patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Maximum number of stored patterns (`P`).
    pub fn capacity(&self) -> usize {
        P
    }

    /// Weight matrix trained from the current set.
    pub fn weights(&self) -> &WeightMatrix<N> {
        &self.weights
    }

    /// Relaxation engine over the current weights.
    pub fn engine(&self, config: RecallConfig) -> RelaxationEngine<'_, N> {
        RelaxationEngine::new(&self.weights, config)
    }

    /// Recall `probe` against the stored set.
    pub fn recall(&self, probe: &Pattern<N>, config: &RecallConfig) -> RecallOutcome<N> {
        self.engine(config.clone()).recall(probe)
    }

    /// Recall `probe`, surfacing intermediate states to `observer`.
    pub fn recall_observed<O>(
        &self,
        probe: &Pattern<N>,
        config: &RecallConfig,
        observer: &mut O,
    ) -> RecallOutcome<N>
    where
        O: RecallObserver<N> + ?Sized,
    {
        self.engine(config.clone()).recall_observed(probe, observer)
    }

    /// Nearest stored pattern to `state`; the first stored wins ties.
    pub fn identify(&self, state: &Pattern<N>) -> Option<PatternMatch<'_>> {
        self.patterns
            .iter()
            .map(|(label, p)| PatternMatch {
                label: label.as_str(),
                distance: p.hamming_distance(state),
            })
            .min_by_key(|m| m.distance)
    }
}

impl<const N: usize, const P: usize> Default for HopfieldNetwork<N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const P: usize> core::fmt::Debug for HopfieldNetwork<N, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HopfieldNetwork")
            .field("units", &N)
            .field("patterns", &self.patterns.len())
            .field("capacity", &P)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recall::RecallStatus;

    fn p4(values: [i8; 4]) -> Pattern<4> {
        Pattern::new(values).unwrap()
    }

    fn pair() -> HopfieldNetwork<4, 4> {
        let mut net = HopfieldNetwork::new();
        net.store("v1", p4([1, 1, -1, -1])).unwrap();
        net.store("v2", p4([1, -1, 1, -1])).unwrap();
        net
    }

    #[test]
    fn test_store_trains_from_full_set() {
        let net = pair();
        let batch = WeightMatrix::train(&[p4([1, 1, -1, -1]), p4([1, -1, 1, -1])]);
        assert_eq!(net.weights(), &batch);
        assert_eq!(net.len(), 2);
    }

    #[test]
    fn test_store_same_label_replaces() {
        let mut net = pair();
        let old = net.store("v1", p4([-1, -1, 1, 1])).unwrap();
        assert_eq!(old, Some(p4([1, 1, -1, -1])));
        assert_eq!(net.len(), 2);
        assert_eq!(net.pattern("v1"), Some(&p4([-1, -1, 1, 1])));
    }

    #[test]
    fn test_remove_retrains() {
        let mut net = pair();
        assert!(net.remove("v2").is_some());
        assert!(net.remove("v2").is_none());
        assert_eq!(net.weights(), &WeightMatrix::train(&[p4([1, 1, -1, -1])]));
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut net: HopfieldNetwork<4, 2> = HopfieldNetwork::new();
        net.store("a", p4([1, 1, 1, 1])).unwrap();
        net.store("b", p4([1, -1, 1, -1])).unwrap();
        let err = net.store("c", p4([1, 1, -1, -1])).unwrap_err();
        assert_eq!(err, NetworkError::Capacity { capacity: 2 });
        assert_eq!(net.len(), 2);
    }

    #[test]
    fn test_label_too_long() {
        let mut net: HopfieldNetwork<4, 2> = HopfieldNetwork::new();
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        let err = net.store(long, p4([1, 1, 1, 1])).unwrap_err();
        assert_eq!(err, NetworkError::LabelTooLong { max: LABEL_CAPACITY });
        assert!(net.pattern(long).is_none());
    }

    #[test]
    fn test_store_rows_validates_shape() {
        let mut net: HopfieldNetwork<4, 2> = HopfieldNetwork::new();
        let rows: [&[u8]; 2] = [&[1, 0], &[0]];
        let err = net.store_rows::<_, 2, 2>("bad", &rows).unwrap_err();
        assert!(matches!(err, NetworkError::Format(_)));
        net.store_rows::<_, 2, 2>("ok", &[[1u8, 0], [0, 1]]).unwrap();
        assert_eq!(net.pattern("ok"), Some(&p4([1, -1, -1, 1])));
    }

    #[test]
    fn test_recall_and_identify() {
        let net = pair();
        let out = net.recall(&p4([1, 1, -1, -1]), &RecallConfig::new(10));
        assert_eq!(out.status, RecallStatus::Converged);
        let m = net.identify(&out.state).unwrap();
        assert_eq!(m.label, "v1");
        assert!(m.is_exact());
    }

    #[test]
    fn test_identify_empty_network() {
        let net: HopfieldNetwork<4, 2> = HopfieldNetwork::new();
        assert!(net.identify(&p4([1, 1, 1, 1])).is_none());
        assert!(net.is_empty());
        assert_eq!(net.capacity(), 2);
    }
}
