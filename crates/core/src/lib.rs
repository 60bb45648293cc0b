//! Hexgrid is a hexagonal-grid coordinate engine. It converts between
//! pixel-space points and hex-grid cube coordinates, and generates
//! collections of hexes arranged into the standard grid shapes
//! (parallelogram, triangle, hexagon, rectangle), for both pointy- and
//! flat-topped grids. It is aimed at anything that renders or simulates on a
//! hex lattice (board games, map tools, procedural generation) and only
//! does coordinate math: no pathfinding, no rendering.
//!
//! ```
//! use hexgrid::{Grid, GridConfig};
//!
//! let grid = Grid::new(GridConfig::default()).unwrap();
//!
//! // A 2x3 parallelogram of hexes, leaning southeast from the origin
//! let hexes = grid.parallelogram((2, 3));
//! assert_eq!(hexes.len(), 6);
//!
//! // Which hex is the pixel point (10.0, 4.2) in?
//! let hex = grid.point_to_hex((10.0, 4.2));
//! assert_eq!(hex.coord(), grid.point_to_hex(hex.to_point()).coord());
//! ```
//!
//! See [GridConfig] for the grid parameters (hex size and orientation) and
//! the methods on [Grid] for everything a grid can do.

mod config;
mod grid;
mod hex;
mod screen;

pub use crate::{
    config::{GridConfig, Orientation},
    grid::{
        shape::{
            HexagonOptions, ParallelogramOptions, RectangleOptions,
            TriangleOptions,
        },
        Grid, Hex,
    },
    hex::{
        AxisPair, CompassDirection, FracCoord, HexCoord, HexVector,
        TriangleDirection,
    },
    screen::Point2,
};
