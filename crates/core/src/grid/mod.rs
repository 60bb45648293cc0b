//! The grid itself: hex/pixel conversion, layout metrics, and the [Hex]
//! values a grid mints. Shape generation (parallelograms, triangles,
//! hexagons, rectangles) is implemented in the `shape` submodule as further
//! methods on [Grid].

pub mod shape;

use crate::{
    config::{GridConfig, Orientation},
    hex::{FracCoord, HexCoord},
    screen::Point2,
};
use anyhow::Context;
use derive_more::Display;
use log::debug;
use nalgebra::Vector2;
use validator::Validate;

/// A hex grid: a validated [GridConfig] plus everything you can do with it.
/// The grid holds no tiles of its own; it is the coordinate engine that
/// converts between pixel space and hex space and enumerates hexes arranged
/// into shapes. Grids are cheap to create and freely copyable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    config: GridConfig,
}

impl Grid {
    /// Create a grid from the given config. Returns an error if the config
    /// is invalid (e.g. a non-positive hex size).
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        debug!("creating grid with config {:?}", config);
        Ok(Self { config })
    }

    /// Get a reference to the config that defines this grid.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Mint the hex at the given coordinate, bound to this grid's size and
    /// orientation. This is the single construction point all generators and
    /// conversions funnel through.
    pub fn hex(&self, coord: HexCoord) -> Hex {
        Hex {
            coord,
            config: self.config,
        }
    }

    /// Find the hex containing the given pixel point. The point is mapped
    /// through the orientation's inverse conversion matrix into fractional
    /// cube coordinates, then snapped to the nearest lattice hex with
    /// [FracCoord::round]. Every finite point maps to some hex; there are no
    /// error cases.
    pub fn point_to_hex(&self, point: impl Into<Point2>) -> Hex {
        let point = point.into();
        let fractional = self.config.orientation.inverse_matrix()
            * Vector2::new(point.x, point.y)
            / self.config.size;
        self.hex(FracCoord::new_xy(fractional.x, fractional.y).round())
    }

    /// Get the pixel-space center of a hex. Pure delegation to
    /// [Hex::to_point], kept on the grid so conversion has a symmetric API
    /// in both directions.
    pub fn hex_to_point(&self, hex: Hex) -> Point2 {
        hex.to_point()
    }

    /// Pixel distance between the centers of two adjacent columns. Adjacent
    /// flat columns overlap by a quarter of their width, pointy columns not
    /// at all.
    pub fn col_size(&self) -> f64 {
        let hex = self.hex(HexCoord::ORIGIN);
        match self.config.orientation {
            Orientation::Pointy => hex.width(),
            Orientation::Flat => 0.75 * hex.width(),
        }
    }

    /// Pixel distance between the centers of two adjacent rows. The mirror
    /// of [Self::col_size]: pointy rows overlap by a quarter of their
    /// height, flat rows not at all.
    pub fn row_size(&self) -> f64 {
        let hex = self.hex(HexCoord::ORIGIN);
        match self.config.orientation {
            Orientation::Pointy => 0.75 * hex.height(),
            Orientation::Flat => hex.height(),
        }
    }
}

/// A single hex: a cube coordinate bound to the size and orientation of the
/// grid that minted it, so it can answer geometric questions (pixel center,
/// width, height) on its own. Construct hexes through [Grid::hex] or the
/// shape generators.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "{}", "self.coord")]
pub struct Hex {
    coord: HexCoord,
    config: GridConfig,
}

impl Hex {
    /// The cube coordinate of this hex.
    pub fn coord(self) -> HexCoord {
        self.coord
    }

    pub fn x(self) -> i32 {
        self.coord.x()
    }

    pub fn y(self) -> i32 {
        self.coord.y()
    }

    pub fn z(self) -> i32 {
        self.coord.z()
    }

    /// Distance from this hex's center to any of its corners, in pixels.
    pub fn size(self) -> f64 {
        self.config.size
    }

    pub fn is_pointy(self) -> bool {
        self.config.orientation == Orientation::Pointy
    }

    pub fn is_flat(self) -> bool {
        self.config.orientation == Orientation::Flat
    }

    /// Width of this hex in pixels.
    pub fn width(self) -> f64 {
        self.config.orientation.unit_width() * self.config.size
    }

    /// Height of this hex in pixels.
    pub fn height(self) -> f64 {
        self.config.orientation.unit_height() * self.config.size
    }

    /// The pixel-space center of this hex, via the orientation's forward
    /// conversion matrix scaled by the grid size.
    pub fn to_point(self) -> Point2 {
        let center = self.config.orientation.forward_matrix()
            * Vector2::new(self.coord.x() as f64, self.coord.y() as f64)
            * self.config.size;
        Point2 {
            x: center.x,
            y: center.y,
        }
    }
}
