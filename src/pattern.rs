/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Bipolar pattern vectors and the binary → bipolar codec.
//!
//! A [`Pattern`] is the flat, row-major encoding of a grid: `N` components,
//! each either `-1` (empty cell) or `+1` (filled cell).
//!
//! # Invariants
//!
//! - Every component is `-1` or `+1`; constructors either map (`from_bits`)
//!   or validate (`new`).
//! - Length is fixed at the type level by `N`.

use crate::error::FormatError;

/// Map a single binary cell to its bipolar value: `0 ↦ -1`, anything else `↦ +1`.
#[inline]
pub fn bit_to_bipolar(bit: u8) -> i8 {
    if bit == 0 { -1 } else { 1 }
}

/// Elementwise `0 ↦ -1`, `1 ↦ +1` over a flat binary vector.
///
/// The input is assumed to be validated already (see [`crate::grid::Grid`]);
/// non-zero cells are treated as filled.
pub fn to_bipolar<const N: usize>(bits: &[u8; N]) -> Pattern<N> {
    Pattern::from_bits(bits)
}

/// The activation rule applied to one unit.
///
/// Positive net input switches the unit on, negative switches it off, and a net
/// input of exactly zero leaves the unit at `previous`. The zero case does
/// **not** default to `+1`.
#[inline]
pub fn threshold(net_input: i32, previous: i8) -> i8 {
    if net_input > 0 {
        1
    } else if net_input < 0 {
        -1
    } else {
        previous
    }
}

/// Flat bipolar pattern of `N` units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern<const N: usize> {
    values: [i8; N],
}

impl<const N: usize> Pattern<N> {
    /// Number of units.
    pub const LEN: usize = N;

    /// Build a pattern from raw bipolar components.
    ///
    /// Fails with [`FormatError::InvalidComponent`] on the first value that is
    /// neither `-1` nor `+1`.
    pub fn new(values: [i8; N]) -> Result<Self, FormatError> {
        for (index, &value) in values.iter().enumerate() {
            if value != 1 && value != -1 {
                return Err(FormatError::InvalidComponent { index, value });
            }
        }
        Ok(Self { values })
    }

    /// Build a pattern from a slice of raw bipolar components, checking its length.
    pub fn from_slice(values: &[i8]) -> Result<Self, FormatError> {
        let array: [i8; N] = values.try_into().map_err(|_| FormatError::Length {
            expected: N,
            found: values.len(),
        })?;
        Self::new(array)
    }

    /// Encode a flat binary vector (`0 ↦ -1`, non-zero `↦ +1`).
    pub fn from_bits(bits: &[u8; N]) -> Self {
        let mut values = [-1i8; N];
        for (v, &b) in values.iter_mut().zip(bits.iter()) {
            *v = bit_to_bipolar(b);
        }
        Self { values }
    }

    /// Pattern with every unit on (`positive`) or every unit off.
    pub fn uniform(positive: bool) -> Self {
        Self {
            values: [if positive { 1 } else { -1 }; N],
        }
    }

    /// Decode back to binary cells (`-1 ↦ 0`, `+1 ↦ 1`). Display only.
    pub fn to_bits(&self) -> [u8; N] {
        let mut bits = [0u8; N];
        for (b, &v) in bits.iter_mut().zip(self.values.iter()) {
            *b = u8::from(v > 0);
        }
        bits
    }

    /// Raw components.
    pub fn values(&self) -> &[i8; N] {
        &self.values
    }

    /// Component `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<i8> {
        self.values.get(index).copied()
    }

    /// `true` when unit `index` is on (`+1`).
    pub fn is_active(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(|&v| v > 0)
    }

    /// Number of units (always `N`).
    pub fn len(&self) -> usize {
        N
    }

    /// `true` only for the zero-length pattern.
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of units that are on.
    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0).count()
    }

    /// Dot product with another pattern. Ranges over `[-N, N]`.
    pub fn overlap(&self, other: &Self) -> i32 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| i32::from(a) * i32::from(b))
            .sum()
    }

    /// Number of units that differ from `other`.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Every unit flipped.
    pub fn inverted(&self) -> Self {
        let mut values = self.values;
        for v in values.iter_mut() {
            *v = -*v;
        }
        Self { values }
    }

    /// Flip unit `index` in place.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn flip(&mut self, index: usize) {
        self.values[index] = -self.values[index];
    }

    /// Copy of this pattern with each listed unit flipped once.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= N`.
    pub fn with_flipped(&self, indices: &[usize]) -> Self {
        let mut out = *self;
        for &i in indices {
            out.flip(i);
        }
        out
    }

    /// Apply [`threshold`] to every unit, using this pattern as the previous state.
    pub fn relax(&self, activation: &[i32; N]) -> Self {
        let mut values = self.values;
        for (v, &y) in values.iter_mut().zip(activation.iter()) {
            *v = threshold(y, *v);
        }
        Self { values }
    }
}

impl<const N: usize> TryFrom<[i8; N]> for Pattern<N> {
    type Error = FormatError;

    fn try_from(values: [i8; N]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl<const N: usize> AsRef<[i8]> for Pattern<N> {
    fn as_ref(&self) -> &[i8] {
        &self.values
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Pattern;
    use core::fmt;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Arrays of arbitrary const length have no serde impls, so patterns go
    // through a plain sequence of N components.
    impl<const N: usize> Serialize for Pattern<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(N))?;
            for v in self.values.iter() {
                seq.serialize_element(v)?;
            }
            seq.end()
        }
    }

    struct PatternVisitor<const N: usize>;

    impl<'de, const N: usize> Visitor<'de> for PatternVisitor<N> {
        type Value = Pattern<N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} values, each -1 or 1", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = [0i8; N];
            for (i, slot) in values.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<i8>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Pattern::new(values).map_err(de::Error::custom)
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for Pattern<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(PatternVisitor::<N>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bipolar_maps_zero_to_minus_one() {
        let p = to_bipolar(&[0, 1, 1, 0]);
        assert_eq!(p.values(), &[-1, 1, 1, -1]);
    }

    #[test]
    fn test_to_bits_inverts_to_bipolar() {
        let bits = [1, 0, 0, 1, 1];
        assert_eq!(to_bipolar(&bits).to_bits(), bits);
    }

    #[test]
    fn test_new_rejects_non_bipolar_component() {
        let err = Pattern::new([1, -1, 0, 1]).unwrap_err();
        assert_eq!(err, FormatError::InvalidComponent { index: 2, value: 0 });
    }

    #[test]
    fn test_from_slice_checks_length() {
        let err = Pattern::<4>::from_slice(&[1, -1, 1]).unwrap_err();
        assert_eq!(err, FormatError::Length { expected: 4, found: 3 });
        assert!(Pattern::<3>::from_slice(&[1, -1, 1]).is_ok());
    }

    #[test]
    fn test_threshold_zero_keeps_previous() {
        assert_eq!(threshold(5, -1), 1);
        assert_eq!(threshold(-3, 1), -1);
        // Zero net input must hold the previous value in both directions.
        assert_eq!(threshold(0, -1), -1);
        assert_eq!(threshold(0, 1), 1);
    }

    #[test]
    fn test_overlap_and_hamming_distance() {
        let a = Pattern::new([1, 1, -1, -1]).unwrap();
        let b = Pattern::new([1, -1, 1, -1]).unwrap();
        assert_eq!(a.overlap(&b), 0);
        assert_eq!(a.overlap(&a), 4);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.hamming_distance(&a.inverted()), 4);
    }

    #[test]
    fn test_with_flipped_leaves_original_untouched() {
        let a = Pattern::<5>::uniform(true);
        let b = a.with_flipped(&[0, 3]);
        assert_eq!(a.active_count(), 5);
        assert_eq!(b.values(), &[-1, 1, 1, -1, 1]);
        assert!(!b.is_active(0));
        assert!(b.is_active(1));
    }

    #[test]
    fn test_relax_applies_threshold_per_unit() {
        let prev = Pattern::new([1, -1, 1, -1]).unwrap();
        let next = prev.relax(&[-2, 4, 0, 0]);
        assert_eq!(next.values(), &[-1, 1, 1, -1]);
    }
}
