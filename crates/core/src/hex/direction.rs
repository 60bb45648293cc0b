//! Direction vocabulary for shape generation. Each shape supports a set of
//! named directions, and each direction resolves through a static table (not
//! arithmetic) to an assignment of the shape's two loop indices onto two of
//! the three cube axes, plus an optional sign flip. Adding or checking a
//! direction is a table edit, never new control flow.

use crate::hex::HexVector;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An ordered pair of cube axes. A shape generator walks a pair of loop
/// indices `(first, second)`; an axis pair says which cube axis each index
/// lands on, with the remaining axis derived from the invariant. The variant
/// name lists the target of `first`, then the target of `second`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AxisPair {
    XY,
    XZ,
    YX,
    YZ,
    ZX,
    ZY,
}

impl AxisPair {
    /// Build the translation vector that places `first` and `second` on this
    /// pair's axes.
    pub(crate) fn vector(self, first: i32, second: i32) -> HexVector {
        match self {
            Self::XY => HexVector::new_xy(first, second),
            Self::XZ => HexVector::new_xz(first, second),
            Self::YX => HexVector::new_xy(second, first),
            Self::YZ => HexVector::new_yz(first, second),
            Self::ZX => HexVector::new_xz(second, first),
            Self::ZY => HexVector::new_yz(second, first),
        }
    }
}

/// A compass-style direction token, shared by the shapes that take one.
/// Parallelogram supports N/NE/SE/S/SW/NW and rectangle supports
/// E/NE/SE/W/NW/SW; a token outside a shape's set silently falls back to
/// that shape's default, matching the deliberately permissive behavior of
/// the generators.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    /// Default direction for parallelogram generation.
    pub const PARALLELOGRAM_DEFAULT: Self = Self::SE;
    /// Default direction for rectangle generation.
    pub const RECTANGLE_DEFAULT: Self = Self::E;

    /// Parse a direction token, falling back to the given default on
    /// anything unrecognized rather than erroring.
    pub fn parse_lenient(token: &str, fallback: Self) -> Self {
        token.parse().unwrap_or(fallback)
    }

    /// Direction table for the parallelogram shape. A parallelogram is
    /// spanned by two of the three axes; the three positive assignments
    /// lean SE, N and SW, and the opposite compass points are their
    /// negations. The returned flag is that sign flip.
    pub(crate) fn parallelogram_axes(self) -> (AxisPair, bool) {
        match self {
            Self::SE => (AxisPair::XY, false),
            Self::N => (AxisPair::XZ, false),
            Self::SW => (AxisPair::ZY, false),
            Self::NW => (AxisPair::XY, true),
            Self::S => (AxisPair::XZ, true),
            Self::NE => (AxisPair::ZY, true),
            // E and W aren't parallelogram directions; fall back
            Self::E | Self::W => (AxisPair::XY, false),
        }
    }

    /// Direction table for the rectangle shape: all six ordered axis pairs,
    /// one per supported compass point, applied on top of the
    /// orientation-specific staggered base grid.
    pub(crate) fn rectangle_axes(self) -> AxisPair {
        match self {
            Self::E => AxisPair::XY,
            Self::NE => AxisPair::XZ,
            Self::SE => AxisPair::YX,
            Self::SW => AxisPair::YZ,
            Self::W => AxisPair::ZY,
            Self::NW => AxisPair::ZX,
            // N and S aren't rectangle directions; fall back
            Self::N | Self::S => AxisPair::XY,
        }
    }
}

/// The two directions a generated triangle can point. With POINTY hexes
/// "down" puts the apex at the start coordinate and grows along +x/+y;
/// "up" is its reflection, with the base along the start row instead.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TriangleDirection {
    Down,
    Up,
}

impl TriangleDirection {
    /// Parse a direction token, falling back to the given default on
    /// anything unrecognized rather than erroring.
    pub fn parse_lenient(token: &str, fallback: Self) -> Self {
        token.parse().unwrap_or(fallback)
    }

    /// The range of y values generated for column `x` of a triangle with the
    /// given side length. Down-triangles shrink toward +x, up-triangles grow.
    pub(crate) fn column_range(
        self,
        side: u32,
        x: i32,
    ) -> std::ops::Range<i32> {
        let side = side as i32;
        match self {
            Self::Down => 0..(side - x),
            Self::Up => (side - x)..(side + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(vector: HexVector) -> (i32, i32, i32) {
        (vector.x(), vector.y(), vector.z())
    }

    #[test]
    fn test_axis_pair_vectors() {
        assert_eq!(components(AxisPair::XY.vector(1, 2)), (1, 2, -3));
        assert_eq!(components(AxisPair::XZ.vector(1, 2)), (1, -3, 2));
        assert_eq!(components(AxisPair::YX.vector(1, 2)), (2, 1, -3));
        assert_eq!(components(AxisPair::YZ.vector(1, 2)), (-3, 1, 2));
        assert_eq!(components(AxisPair::ZX.vector(1, 2)), (2, -3, 1));
        assert_eq!(components(AxisPair::ZY.vector(1, 2)), (-3, 2, 1));
    }

    #[test]
    fn test_parallelogram_table_negations() {
        // Opposite compass points use the same axis pair with the sign
        // flipped
        for (positive, negative) in [
            (CompassDirection::SE, CompassDirection::NW),
            (CompassDirection::N, CompassDirection::S),
            (CompassDirection::SW, CompassDirection::NE),
        ] {
            let (axes, flip) = positive.parallelogram_axes();
            let (opposite_axes, opposite_flip) =
                negative.parallelogram_axes();
            assert_eq!(axes, opposite_axes);
            assert!(!flip);
            assert!(opposite_flip);
        }
    }

    #[test]
    fn test_off_table_tokens_fall_back() {
        assert_eq!(
            CompassDirection::E.parallelogram_axes(),
            CompassDirection::PARALLELOGRAM_DEFAULT.parallelogram_axes()
        );
        assert_eq!(
            CompassDirection::N.rectangle_axes(),
            CompassDirection::RECTANGLE_DEFAULT.rectangle_axes()
        );
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(
            CompassDirection::parse_lenient("NW", CompassDirection::SE),
            CompassDirection::NW
        );
        assert_eq!(
            CompassDirection::parse_lenient(
                "upwards",
                CompassDirection::SE
            ),
            CompassDirection::SE
        );
        assert_eq!(
            TriangleDirection::parse_lenient("up", TriangleDirection::Down),
            TriangleDirection::Up
        );
        assert_eq!(
            TriangleDirection::parse_lenient(
                "sideways",
                TriangleDirection::Down
            ),
            TriangleDirection::Down
        );
    }

    #[test]
    fn test_triangle_column_ranges() {
        // side 3, pointing down: columns shrink 3, 2, 1
        let down = TriangleDirection::Down;
        assert_eq!(down.column_range(3, 0), 0..3);
        assert_eq!(down.column_range(3, 1), 0..2);
        assert_eq!(down.column_range(3, 2), 0..1);

        // side 3, pointing up: columns grow 1, 2, 3
        let up = TriangleDirection::Up;
        assert_eq!(up.column_range(3, 0), 3..4);
        assert_eq!(up.column_range(3, 1), 2..4);
        assert_eq!(up.column_range(3, 2), 1..4);
    }
}
