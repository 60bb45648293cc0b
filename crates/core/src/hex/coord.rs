//! Coordinate units: integer cube coordinates, fractional cube coordinates
//! (an intermediate of pixel conversion), and translation vectors. See the
//! parent module docs for a description of the coordinate system.

use anyhow::{anyhow, Context};
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{ops, str::FromStr};

/// A cube coordinate referring to a single hex in a grid.
///
/// Since `x + y + z = 0` for every coordinate, this struct only stores `x`
/// and `y` and derives `z` on demand, which makes the invariant impossible to
/// break and saves a third of the memory.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct HexCoord {
    x: i32,
    y: i32,
}

impl HexCoord {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a coordinate from all three components, validating the
    /// zero-sum invariant. Useful at boundaries that accept untrusted
    /// triples; prefer the infallible two-component constructors internally.
    pub fn new(x: i32, y: i32, z: i32) -> anyhow::Result<Self> {
        if x + y + z != 0 {
            Err(anyhow!(
                "invalid cube coordinate ({}, {}, {}); \
                components must sum to zero",
                x,
                y,
                z
            ))
        } else {
            Ok(Self::new_xy(x, y))
        }
    }

    /// Construct a coordinate from its x and y components, deriving z.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a coordinate from its x and z components, deriving y.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a coordinate from its y and z components, deriving x.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    pub const fn z(self) -> i32 {
        -(self.x + self.y)
    }
}

impl ops::Add<HexVector> for HexCoord {
    type Output = HexCoord;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new_xy(self.x + rhs.x(), self.y + rhs.y())
    }
}

impl ops::Sub<HexVector> for HexCoord {
    type Output = HexCoord;

    fn sub(self, rhs: HexVector) -> Self::Output {
        Self::new_xy(self.x - rhs.x(), self.y - rhs.y())
    }
}

impl FromStr for HexCoord {
    type Err = anyhow::Error;

    /// Parse a comma-separated component list: `x,y` or `x,y,z`. The
    /// three-component form is checked against the zero-sum invariant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split(',')
            .map(|component| component.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid hex coordinate {s:?}"))?;
        match components.as_slice() {
            [x, y] => Ok(Self::new_xy(*x, *y)),
            [x, y, z] => Self::new(*x, *y, *z),
            _ => Err(anyhow!(
                "invalid hex coordinate {:?}; expected `x,y` or `x,y,z`",
                s
            )),
        }
    }
}

/// A cube coordinate with fractional components, produced when a pixel point
/// lands somewhere inside a hex rather than exactly on its center. A
/// fractional coordinate doesn't refer to any hex until it has been snapped
/// back onto the integer lattice with [Self::round].
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z()")]
pub struct FracCoord {
    x: f64,
    y: f64,
}

impl FracCoord {
    /// Construct a fractional coordinate from its x and y components,
    /// deriving z.
    pub const fn new_xy(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> f64 {
        self.x
    }

    pub const fn y(self) -> f64 {
        self.y
    }

    pub fn z(self) -> f64 {
        -(self.x + self.y)
    }

    /// Snap this coordinate to the nearest hex on the integer lattice.
    ///
    /// Rounding each component independently can land off the
    /// `x + y + z = 0` plane, so the component that rounded furthest is
    /// recomputed from the other two. Points exactly on a boundary between
    /// hexes resolve by whichever axis the comparison chain picks first;
    /// that choice is stable but not otherwise meaningful.
    pub fn round(self) -> HexCoord {
        let mut rx = self.x.round();
        let mut ry = self.y.round();
        let rz = self.z().round();

        let dx = (rx - self.x).abs();
        let dy = (ry - self.y).abs();
        let dz = (rz - self.z()).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        }
        // If z had the largest delta it is simply recomputed from x and y,
        // which the storage scheme does for free

        HexCoord::new_xy(rx as i32, ry as i32)
    }
}

impl From<HexCoord> for FracCoord {
    fn from(coord: HexCoord) -> Self {
        Self::new_xy(coord.x() as f64, coord.y() as f64)
    }
}

/// A translation within the hex grid: the same `(x, y, z)` representation as
/// [HexCoord], but denoting a difference between coordinates rather than a
/// position. Shape generators build these from loop indices and cube-add them
/// onto a start coordinate.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    AddAssign,
    Neg,
    Sub,
    SubAssign,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct HexVector {
    x: i32,
    y: i32,
}

impl HexVector {
    pub const ZERO: Self = Self::new_xy(0, 0);

    /// Construct a vector from its x and y components, deriving z.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a vector from its x and z components, deriving y.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a vector from its y and z components, deriving x.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    pub const fn z(self) -> i32 {
        -(self.x + self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checked() {
        assert_eq!(
            HexCoord::new(1, 2, -3).unwrap(),
            HexCoord::new_xy(1, 2)
        );
        assert_eq!(
            HexCoord::new(0, 0, 0).unwrap(),
            HexCoord::ORIGIN
        );
        assert!(HexCoord::new(1, 2, 3).is_err());
    }

    #[test]
    fn test_derived_components() {
        let coord = HexCoord::new_xz(2, -5);
        assert_eq!((coord.x(), coord.y(), coord.z()), (2, 3, -5));

        let coord = HexCoord::new_yz(4, -1);
        assert_eq!((coord.x(), coord.y(), coord.z()), (-3, 4, -1));

        assert_eq!(HexVector::new_xz(1, 0).y(), -1);
        assert_eq!(HexVector::new_yz(0, 1).x(), -1);
    }

    #[test]
    fn test_cube_add() {
        let coord = HexCoord::new_xy(5, 4) + HexVector::new_xy(1, 1);
        assert_eq!((coord.x(), coord.y(), coord.z()), (6, 5, -11));

        let coord = HexCoord::ORIGIN - HexVector::new_xy(2, -1);
        assert_eq!((coord.x(), coord.y(), coord.z()), (-2, 1, 1));
    }

    #[test]
    fn test_round_on_lattice() {
        // Exact lattice points have zero rounding error
        for x in -3..=3 {
            for y in -3..=3 {
                let coord = HexCoord::new_xy(x, y);
                assert_eq!(FracCoord::from(coord).round(), coord);
            }
        }
    }

    #[test]
    fn test_round_corrects_largest_delta() {
        // y rounded furthest, so it gets recomputed from x and z
        let rounded = FracCoord::new_xy(0.244, 0.667).round();
        assert_eq!(rounded, HexCoord::new_xy(0, 1));

        // x rounded furthest
        let rounded = FracCoord::new_xy(0.667, 0.244).round();
        assert_eq!(rounded, HexCoord::new_xy(1, 0));

        // Negative components round the same way
        let rounded = FracCoord::new_xy(-0.667, -0.244).round();
        assert_eq!(rounded, HexCoord::new_xy(-1, 0));
    }

    #[test]
    fn test_round_holds_invariant() {
        // The invariant must survive rounding even for awkward fractions
        for &(x, y) in &[
            (0.5, 0.5),
            (-0.5, 0.5),
            (2.49, -1.51),
            (-3.99, 0.01),
            (1e6 + 0.3, -2e6 + 0.4),
        ] {
            let rounded = FracCoord::new_xy(x, y).round();
            assert_eq!(
                rounded.x() + rounded.y() + rounded.z(),
                0,
                "invariant broken rounding ({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "3,4".parse::<HexCoord>().unwrap(),
            HexCoord::new_xy(3, 4)
        );
        assert_eq!(
            " -2 , 1 ".parse::<HexCoord>().unwrap(),
            HexCoord::new_xy(-2, 1)
        );
        assert_eq!(
            "1,2,-3".parse::<HexCoord>().unwrap(),
            HexCoord::new_xy(1, 2)
        );
        assert!("1,2,3".parse::<HexCoord>().is_err());
        assert!("1".parse::<HexCoord>().is_err());
        assert!("a,b".parse::<HexCoord>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(HexCoord::new_xy(1, 2).to_string(), "(1, 2, -3)");
        assert_eq!(HexVector::new_xy(-1, 0).to_string(), "(-1, 0, 1)");
    }
}
