//! Shape generation: enumerating the hexes that form a parallelogram,
//! triangle, hexagon or rectangle on the grid.
//!
//! Every generator follows the same recipe: walk a pair of loop indices over
//! the shape's raw index set, permute them onto cube axes according to the
//! requested direction (a static table in [crate::hex]), cube-add the start
//! coordinate, and mint a [Hex] for the result. Generation is eager and the
//! returned `Vec` is in generation order, not spatially sorted.
//!
//! Each generator takes an options struct with defaulted fields. `From`
//! impls on tuples cover the common positional call styles, so
//! `grid.parallelogram((2, 3))` and
//! `grid.parallelogram(ParallelogramOptions { width: 2, height: 3,
//! ..Default::default() })` are equivalent.
//!
//! Dimensions are deliberately unvalidated: a zero width, height, side or
//! radius simply produces an empty collection, falling out of the loop
//! bounds rather than being special-cased.

use crate::{
    config::Orientation,
    grid::{Grid, Hex},
    hex::{CompassDirection, HexCoord, HexVector, TriangleDirection},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp;

/// Options for [Grid::parallelogram].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelogramOptions {
    /// Hexes along the first spanned axis.
    pub width: u32,
    /// Hexes along the second spanned axis.
    pub height: u32,
    /// Coordinate of the first generated hex.
    pub start: HexCoord,
    /// Which way the shape leans from the start hex.
    pub direction: CompassDirection,
}

impl Default for ParallelogramOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            start: HexCoord::ORIGIN,
            direction: CompassDirection::PARALLELOGRAM_DEFAULT,
        }
    }
}

impl From<(u32, u32)> for ParallelogramOptions {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl From<(u32, u32, HexCoord)> for ParallelogramOptions {
    fn from((width, height, start): (u32, u32, HexCoord)) -> Self {
        Self {
            width,
            height,
            start,
            ..Default::default()
        }
    }
}

impl From<(u32, u32, CompassDirection)> for ParallelogramOptions {
    fn from(
        (width, height, direction): (u32, u32, CompassDirection),
    ) -> Self {
        Self {
            width,
            height,
            direction,
            ..Default::default()
        }
    }
}

impl From<(u32, u32, HexCoord, CompassDirection)> for ParallelogramOptions {
    fn from(
        (width, height, start, direction): (
            u32,
            u32,
            HexCoord,
            CompassDirection,
        ),
    ) -> Self {
        Self {
            width,
            height,
            start,
            direction,
        }
    }
}

/// Options for [Grid::triangle].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleOptions {
    /// Hexes along each side of the triangle.
    pub size: u32,
    /// Coordinate the triangle grows from.
    pub start: HexCoord,
    /// Whether the triangle points down (apex at the start) or up.
    pub direction: TriangleDirection,
}

impl Default for TriangleOptions {
    fn default() -> Self {
        Self {
            size: 0,
            start: HexCoord::ORIGIN,
            direction: TriangleDirection::Down,
        }
    }
}

impl From<u32> for TriangleOptions {
    fn from(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

impl From<(u32, HexCoord)> for TriangleOptions {
    fn from((size, start): (u32, HexCoord)) -> Self {
        Self {
            size,
            start,
            ..Default::default()
        }
    }
}

impl From<(u32, TriangleDirection)> for TriangleOptions {
    fn from((size, direction): (u32, TriangleDirection)) -> Self {
        Self {
            size,
            direction,
            ..Default::default()
        }
    }
}

impl From<(u32, HexCoord, TriangleDirection)> for TriangleOptions {
    fn from(
        (size, start, direction): (u32, HexCoord, TriangleDirection),
    ) -> Self {
        Self {
            size,
            start,
            direction,
        }
    }
}

/// Options for [Grid::hexagon]. There is no direction: a hexagon is
/// 6-fold symmetric around its center, so every direction would generate
/// the same set.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonOptions {
    /// Distance from the center to the edge of the hexagon, in hexes,
    /// counting the center itself: radius 1 is a single hex, radius 2 is 7
    /// hexes, and so on.
    pub radius: u32,
    /// Coordinate of the center hex.
    pub start: HexCoord,
}

impl Default for HexagonOptions {
    fn default() -> Self {
        Self {
            radius: 0,
            start: HexCoord::ORIGIN,
        }
    }
}

impl From<u32> for HexagonOptions {
    fn from(radius: u32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }
}

impl From<(u32, HexCoord)> for HexagonOptions {
    fn from((radius, start): (u32, HexCoord)) -> Self {
        Self { radius, start }
    }
}

/// Options for [Grid::rectangle].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleOptions {
    /// Hexes along the first (staggered) axis.
    pub width: u32,
    /// Hexes along the second axis.
    pub height: u32,
    /// Coordinate of the first generated hex.
    pub start: HexCoord,
    /// Which way the shape extends from the start hex.
    pub direction: CompassDirection,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            start: HexCoord::ORIGIN,
            direction: CompassDirection::RECTANGLE_DEFAULT,
        }
    }
}

impl From<(u32, u32)> for RectangleOptions {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl From<(u32, u32, HexCoord)> for RectangleOptions {
    fn from((width, height, start): (u32, u32, HexCoord)) -> Self {
        Self {
            width,
            height,
            start,
            ..Default::default()
        }
    }
}

impl From<(u32, u32, CompassDirection)> for RectangleOptions {
    fn from(
        (width, height, direction): (u32, u32, CompassDirection),
    ) -> Self {
        Self {
            width,
            height,
            direction,
            ..Default::default()
        }
    }
}

impl From<(u32, u32, HexCoord, CompassDirection)> for RectangleOptions {
    fn from(
        (width, height, start, direction): (
            u32,
            u32,
            HexCoord,
            CompassDirection,
        ),
    ) -> Self {
        Self {
            width,
            height,
            start,
            direction,
        }
    }
}

impl Grid {
    /// Generate a `width × height` parallelogram of hexes leaning in the
    /// given direction (southeast by default). Parallelogram directions are
    /// N, NE, SE, S, SW and NW; other tokens fall back to the default.
    pub fn parallelogram(
        &self,
        options: impl Into<ParallelogramOptions>,
    ) -> Vec<Hex> {
        let options = options.into();
        let (axes, negate) = options.direction.parallelogram_axes();

        let mut hexes = Vec::with_capacity(
            options.width as usize * options.height as usize,
        );
        for second in 0..options.height as i32 {
            for first in 0..options.width as i32 {
                let mut offset = axes.vector(first, second);
                if negate {
                    offset = -offset;
                }
                hexes.push(self.hex(options.start + offset));
            }
        }
        debug!("generated {} hexes for {:?}", hexes.len(), options);
        hexes
    }

    /// Generate a triangle of hexes with `size` hexes to a side, pointing
    /// down (apex at the start coordinate) or up. The result holds the
    /// `size`-th triangular number of hexes: `size * (size + 1) / 2`.
    pub fn triangle(&self, options: impl Into<TriangleOptions>) -> Vec<Hex> {
        let options = options.into();

        let size = options.size as usize;
        let mut hexes = Vec::with_capacity(size * (size + 1) / 2);
        for x in 0..options.size as i32 {
            for y in options.direction.column_range(options.size, x) {
                hexes.push(self.hex(options.start + HexVector::new_xy(x, y)));
            }
        }
        debug!("generated {} hexes for {:?}", hexes.len(), options);
        hexes
    }

    /// Generate a filled hexagon of hexes centered on the start coordinate.
    /// For a radius `r` the result holds `3r² - 3r + 1` hexes: each row's
    /// run of hexes shrinks as the row moves away from the center, which is
    /// the same enumeration as walking the rings outward. There is no
    /// direction parameter because the shape is symmetric under all six.
    pub fn hexagon(&self, options: impl Into<HexagonOptions>) -> Vec<Hex> {
        let options = options.into();

        // Ring offsets run [-(radius - 1), radius - 1]; a radius of 0 makes
        // the range empty
        let edge = options.radius as i32 - 1;
        let mut hexes = Vec::new();
        for y in -edge..=edge {
            let x_min = cmp::max(-edge, -y - edge);
            let x_max = cmp::min(edge, -y + edge);
            for x in x_min..=x_max {
                hexes.push(self.hex(options.start + HexVector::new_xy(x, y)));
            }
        }
        debug!("generated {} hexes for {:?}", hexes.len(), options);
        hexes
    }

    /// Generate a `width × height` rectangle of hexes. Rectangles are the
    /// one orientation-sensitive shape: to tile a rectangular region without
    /// gaps, every other row (pointy grids) or column (flat grids) is
    /// staggered back by one hex. Rectangle directions are E, NE, SE, W, NW
    /// and SW; other tokens fall back to the default (east).
    pub fn rectangle(
        &self,
        options: impl Into<RectangleOptions>,
    ) -> Vec<Hex> {
        let options = options.into();
        let axes = options.direction.rectangle_axes();
        let width = options.width as i32;
        let height = options.height as i32;

        let mut hexes =
            Vec::with_capacity(width as usize * height as usize);
        match self.config().orientation {
            // Pointy: rows stagger, so the inner (first) range shifts back
            // by half the row index
            Orientation::Pointy => {
                for second in 0..height {
                    let offset = second / 2;
                    for first in -offset..(width - offset) {
                        hexes.push(self.hex(
                            options.start + axes.vector(first, second),
                        ));
                    }
                }
            }
            // Flat: the mirror image, staggering columns instead of rows
            Orientation::Flat => {
                for first in 0..width {
                    let offset = first / 2;
                    for second in -offset..(height - offset) {
                        hexes.push(self.hex(
                            options.start + axes.vector(first, second),
                        ));
                    }
                }
            }
        }
        debug!("generated {} hexes for {:?}", hexes.len(), options);
        hexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn grid() -> Grid {
        Grid::new(GridConfig::default()).unwrap()
    }

    #[test]
    fn test_options_from_tuples() {
        assert_eq!(
            ParallelogramOptions::from((2, 3)),
            ParallelogramOptions {
                width: 2,
                height: 3,
                start: HexCoord::ORIGIN,
                direction: CompassDirection::SE,
            }
        );
        assert_eq!(
            TriangleOptions::from((4, TriangleDirection::Up)),
            TriangleOptions {
                size: 4,
                start: HexCoord::ORIGIN,
                direction: TriangleDirection::Up,
            }
        );
        assert_eq!(
            RectangleOptions::from((
                2,
                2,
                HexCoord::new_xy(1, 1),
                CompassDirection::W
            )),
            RectangleOptions {
                width: 2,
                height: 2,
                start: HexCoord::new_xy(1, 1),
                direction: CompassDirection::W,
            }
        );
        assert_eq!(
            HexagonOptions::from(5),
            HexagonOptions {
                radius: 5,
                start: HexCoord::ORIGIN,
            }
        );
    }

    #[test]
    fn test_zero_dimensions_are_empty() {
        let grid = grid();
        assert!(grid.parallelogram((0, 5)).is_empty());
        assert!(grid.parallelogram((5, 0)).is_empty());
        assert!(grid.triangle(0).is_empty());
        assert!(grid.hexagon(0).is_empty());
        assert!(grid.rectangle((0, 3)).is_empty());
        assert!(grid.rectangle((3, 0)).is_empty());
    }

    #[test]
    fn test_cardinality() {
        let grid = grid();
        assert_eq!(grid.parallelogram((2, 3)).len(), 6);
        assert_eq!(grid.parallelogram((7, 4)).len(), 28);
        assert_eq!(grid.triangle(4).len(), 4 + 3 + 2 + 1);
        assert_eq!(grid.hexagon(4).len(), 37);
        assert_eq!(grid.rectangle((4, 5)).len(), 20);
    }
}
