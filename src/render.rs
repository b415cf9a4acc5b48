//! Text rendering of patterns and activations.
//!
//! `Display` adapters over borrowed data. Usable in `no_std`.
//!
//! ```rust
//! use hopfield_core::pattern::Pattern;
//! use hopfield_core::render::GridView;
//!
//! let p = Pattern::new([1, -1, -1, 1]).unwrap();
//! assert_eq!(GridView::<2, 2, 4>::new(&p).to_string(), "█·\n·█");
//! ```

use core::fmt;

use crate::pattern::Pattern;

/// Glyph for an active (`+1`) unit.
pub const FILLED: char = '█';
/// Glyph for an inactive (`-1`) unit.
pub const EMPTY: char = '·';

/// A pattern laid out as `R` rows of `C` glyphs. Rows are separated by `\n`,
/// with no trailing newline.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a, const R: usize, const C: usize, const N: usize> {
    pattern: &'a Pattern<N>,
}

impl<'a, const R: usize, const C: usize, const N: usize> GridView<'a, R, C, N> {
    /// View `pattern` as an `R × C` grid.
    pub fn new(pattern: &'a Pattern<N>) -> Self {
        Self { pattern }
    }
}

impl<const R: usize, const C: usize, const N: usize> fmt::Display for GridView<'_, R, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.pattern.values();
        for r in 0..R {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..C {
                let on = values.get(r * C + c).is_some_and(|&v| v > 0);
                write!(f, "{}", if on { FILLED } else { EMPTY })?;
            }
        }
        Ok(())
    }
}

/// Activation vector as space-separated integers.
#[derive(Clone, Copy, Debug)]
pub struct ActivationView<'a, const N: usize>(pub &'a [i32; N]);

impl<const N: usize> fmt::Display for ActivationView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, y) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_grid_view_layout() {
        let p = Pattern::new([1, -1, -1, -1, 1, 1]).unwrap();
        assert_eq!(GridView::<2, 3, 6>::new(&p).to_string(), "█··\n·██");
        assert_eq!(GridView::<3, 2, 6>::new(&p).to_string(), "█·\n··\n██");
    }

    #[test]
    fn test_activation_view() {
        assert_eq!(ActivationView(&[0, -4, 12]).to_string(), "0 -4 12");
    }
}
