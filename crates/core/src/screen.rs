//! Pixel-space units. A hex grid lives in an abstract lattice; this module
//! holds the one type that crosses over into the renderer's world: a plain
//! 2D point measured in pixels, with y growing downward the way screen
//! coordinates usually do.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. Conversions from tuples, arrays and nalgebra
/// points are provided so that callers can hand any point-like value to
/// [Grid::point_to_hex](crate::Grid::point_to_hex) without ceremony.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for Point2 {
    fn from(other: [f64; 2]) -> Self {
        Self {
            x: other[0],
            y: other[1],
        }
    }
}

impl From<(i32, i32)> for Point2 {
    fn from(other: (i32, i32)) -> Self {
        Self {
            x: other.0 as f64,
            y: other.1 as f64,
        }
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let expected = Point2 { x: 1.5, y: -2.0 };
        assert_eq!(Point2::from((1.5, -2.0)), expected);
        assert_eq!(Point2::from([1.5, -2.0]), expected);
        assert_eq!(Point2::from(nalgebra::Point2::new(1.5, -2.0)), expected);
        assert_eq!(Point2::from((2, 3)), Point2 { x: 2.0, y: 3.0 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2 { x: 0.5, y: 2.0 }.to_string(), "(0.5, 2)");
    }
}
