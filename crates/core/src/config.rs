use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// √3. Hexagon geometry is built almost entirely out of this number, but the
/// standard library only ships √2 as a constant.
pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Configuration that defines a hex grid. Two grids created with the same
/// config produce identical coordinate math, so a config fully describes a
/// grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of a hex to any of its corners, in pixels.
    /// This is the single scale factor for all hex/pixel conversions.
    #[validate(range(min = 0.000001, max = 1000000.0))]
    pub size: f64,

    /// Which way the hexes point. See [Orientation].
    pub orientation: Orientation,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            orientation: Orientation::default(),
        }
    }
}

/// The two ways to tile a plane with hexagons: a POINTY hex has a vertex
/// pointing up, a FLAT hex has an edge facing up. Orientation is a property
/// of the whole grid, not of any single coordinate: it decides every
/// trigonometric constant used in hex/pixel conversion.
///
/// See https://www.redblobgames.com/grids/hexagons/#basics for diagrams.
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
pub enum Orientation {
    Pointy,
    Flat,
}

impl Orientation {
    /// Width of a hex of size 1 in this orientation. Multiply by the grid's
    /// size to get the pixel width.
    pub fn unit_width(self) -> f64 {
        match self {
            Self::Pointy => SQRT_3,
            Self::Flat => 2.0,
        }
    }

    /// Height of a hex of size 1 in this orientation. Multiply by the grid's
    /// size to get the pixel height.
    pub fn unit_height(self) -> f64 {
        match self {
            Self::Pointy => 2.0,
            Self::Flat => SQRT_3,
        }
    }

    /// The 2x2 matrix taking the `(x, y)` components of a cube coordinate to
    /// the pixel-space center of that hex, for a grid of size 1. Scale the
    /// result by the grid's size for other grids.
    pub fn forward_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5),
            Self::Flat => Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3),
        }
    }

    /// Inverse of [Self::forward_matrix]: takes a pixel point (divided by the
    /// grid's size) to fractional cube `(x, y)` components.
    pub fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::Flat => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Pointy
    }
}
