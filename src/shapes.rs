//! Reference 8×5 geometric shape dataset.
//!
//! Six shapes drawn on an 8-row, 5-column grid, plus a noisy probe. This is the
//! dataset the demo trains on, and the same grids ship as text files under
//! `dataset/` for the file-loading path.
//!
//! Six patterns in 40 units is above the classical ~0.14·N reliable capacity
//! of a Hebbian network, so not every shape is a fixed point of the full set.
//! Use [`Shape::grid`] with your own subset when you need guaranteed recall.
//!
//! ```rust
//! use hopfield_core::shapes::{self, Shape};
//! use hopfield_core::recall::RecallConfig;
//!
//! let net = shapes::network().unwrap();
//! let out = net.recall(&shapes::noisy_probe().to_pattern(), &RecallConfig::default());
//! assert_eq!(net.identify(&out.state).unwrap().label, Shape::Rhombus.name());
//! ```

use crate::error::NetworkError;
use crate::grid::Grid;
use crate::network::HopfieldNetwork;
use crate::pattern::Pattern;

/// Grid rows.
pub const ROWS: usize = 8;
/// Grid columns.
pub const COLS: usize = 5;
/// Units per pattern (`ROWS × COLS`).
pub const CELLS: usize = ROWS * COLS;
/// Network capacity used by [`network`] (next power of two above the shape count).
pub const NETWORK_CAPACITY: usize = 8;

/// An 8×5 grid.
pub type ShapeGrid = Grid<ROWS, COLS>;
/// A 40-unit pattern.
pub type ShapePattern = Pattern<CELLS>;
/// A network sized for the reference dataset.
pub type ShapeNetwork = HopfieldNetwork<CELLS, NETWORK_CAPACITY>;

const RIGHT_TRIANGLE: ShapeGrid = Grid::from_cells_unchecked([
    [1, 0, 0, 0, 0],
    [1, 1, 0, 0, 0],
    [1, 1, 0, 0, 0],
    [1, 1, 1, 0, 0],
    [1, 1, 1, 0, 0],
    [1, 1, 1, 1, 0],
    [1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1],
]);

const RECTANGLE: ShapeGrid = Grid::from_cells_unchecked([
    [1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1],
]);

const HEXAGON: ShapeGrid = Grid::from_cells_unchecked([
    [0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 1, 1, 1, 0],
    [1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1],
    [0, 1, 1, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
]);

const RHOMBUS: ShapeGrid = Grid::from_cells_unchecked([
    [0, 0, 1, 0, 0],
    [0, 1, 0, 1, 0],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [0, 1, 0, 1, 0],
    [0, 0, 1, 0, 0],
]);

const INVERTED_TRIANGLE: ShapeGrid = Grid::from_cells_unchecked([
    [1, 1, 1, 1, 1],
    [0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
]);

const WEDGE: ShapeGrid = Grid::from_cells_unchecked([
    [0, 0, 0, 0, 1],
    [0, 0, 0, 1, 1],
    [0, 0, 1, 1, 1],
    [0, 1, 1, 1, 1],
    [0, 1, 1, 1, 1],
    [0, 0, 1, 1, 1],
    [0, 0, 0, 1, 1],
    [0, 0, 0, 0, 1],
]);

// Rhombus with cells (3, 3) and (5, 0) flipped.
const NOISY_RHOMBUS: ShapeGrid = Grid::from_cells_unchecked([
    [0, 0, 1, 0, 0],
    [0, 1, 0, 1, 0],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 1, 1],
    [1, 0, 0, 0, 1],
    [0, 0, 0, 0, 1],
    [0, 1, 0, 1, 0],
    [0, 0, 1, 0, 0],
]);

/// The reference shapes, in training order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Right triangle, right angle bottom-left.
    RightTriangle,
    /// Rectangle outline filling the grid.
    Rectangle,
    /// Filled hexagon.
    Hexagon,
    /// Rhombus outline.
    Rhombus,
    /// Filled triangle pointing down.
    InvertedTriangle,
    /// Filled wedge pointing left.
    Wedge,
}

impl Shape {
    /// All shapes, in training order.
    pub const ALL: [Shape; 6] = [
        Shape::RightTriangle,
        Shape::Rectangle,
        Shape::Hexagon,
        Shape::Rhombus,
        Shape::InvertedTriangle,
        Shape::Wedge,
    ];

    /// Stable name, also the dataset file stem.
    pub fn name(self) -> &'static str {
        match self {
            Shape::RightTriangle => "right_triangle",
            Shape::Rectangle => "rectangle",
            Shape::Hexagon => "hexagon",
            Shape::Rhombus => "rhombus",
            Shape::InvertedTriangle => "inverted_triangle",
            Shape::Wedge => "wedge",
        }
    }

    /// Look a shape up by [`Shape::name`].
    pub fn from_name(name: &str) -> Option<Shape> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// The shape's grid.
    pub fn grid(self) -> ShapeGrid {
        match self {
            Shape::RightTriangle => RIGHT_TRIANGLE,
            Shape::Rectangle => RECTANGLE,
            Shape::Hexagon => HEXAGON,
            Shape::Rhombus => RHOMBUS,
            Shape::InvertedTriangle => INVERTED_TRIANGLE,
            Shape::Wedge => WEDGE,
        }
    }

    /// The shape's bipolar pattern.
    pub fn pattern(self) -> ShapePattern {
        self.grid().to_pattern()
    }
}

/// Rhombus with two flipped cells; the demo's recall probe.
pub fn noisy_probe() -> ShapeGrid {
    NOISY_RHOMBUS
}

/// Patterns of every shape, in training order.
pub fn training_set() -> [ShapePattern; 6] {
    Shape::ALL.map(Shape::pattern)
}

/// Network with every reference shape stored under its name.
pub fn network() -> Result<ShapeNetwork, NetworkError> {
    let mut net = ShapeNetwork::new();
    for shape in Shape::ALL {
        net.store_grid(shape.name(), &shape.grid())?;
    }
    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_grids_are_binary() {
        for shape in Shape::ALL {
            let g = shape.grid();
            assert_eq!(Grid::new(*g.cells()), Ok(g), "{:?}", shape);
        }
        assert!(Grid::new(*noisy_probe().cells()).is_ok());
    }

    #[test]
    fn test_shapes_are_distinct() {
        let set = training_set();
        for (i, a) in set.iter().enumerate() {
            for b in &set[i + 1..] {
                assert!(a.hamming_distance(b) > 0);
                assert_ne!(*a, b.inverted());
            }
        }
    }

    #[test]
    fn test_probe_is_two_flips_from_rhombus() {
        let probe: ShapePattern = noisy_probe().to_pattern();
        assert_eq!(probe.hamming_distance(&Shape::Rhombus.pattern()), 2);
    }

    #[test]
    fn test_name_lookup() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_name(shape.name()), Some(shape));
        }
        assert_eq!(Shape::from_name("circle"), None);
    }
}
