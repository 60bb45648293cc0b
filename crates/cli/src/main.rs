use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{
    CompassDirection, Grid, GridConfig, Hex, HexagonOptions, HexCoord,
    ParallelogramOptions, RectangleOptions, TriangleDirection,
    TriangleOptions,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fmt::Write as _,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating hex-grid shapes with the hexgrid coordinate engine.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid (hex size and
    /// orientation). Supported formats: JSON, TOML. Defaults to a
    /// pointy-topped grid of size 1.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, output is written to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The output format. Supported formats:
    ///
    /// coords - Cube coordinates of the generated hexes, as JSON
    ///
    /// points - Pixel centers of the generated hexes, as JSON
    ///
    /// cfg - The full grid config, in TOML format
    ///
    /// text - One `(x, y, z)` coordinate per line
    #[structopt(short = "f", long, default_value = "coords")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    shape: ShapeCommand,
}

/// One subcommand per grid shape.
#[derive(Debug, StructOpt)]
enum ShapeCommand {
    /// Generate a parallelogram of hexes
    Parallelogram {
        /// Hexes along the first spanned axis
        width: u32,
        /// Hexes along the second spanned axis
        height: u32,
        /// Start hex, as comma-separated cube components (`x,y` or `x,y,z`)
        #[structopt(short, long, default_value = "0,0")]
        start: HexCoord,
        /// One of N, NE, SE, S, SW, NW. Unknown tokens fall back to SE
        #[structopt(
            short,
            long,
            default_value = "SE",
            parse(from_str = parallelogram_direction)
        )]
        direction: CompassDirection,
    },
    /// Generate a triangle of hexes
    Triangle {
        /// Hexes along each side of the triangle
        size: u32,
        /// Start hex, as comma-separated cube components (`x,y` or `x,y,z`)
        #[structopt(short, long, default_value = "0,0")]
        start: HexCoord,
        /// Either `down` or `up`. Unknown tokens fall back to down
        #[structopt(
            short,
            long,
            default_value = "down",
            parse(from_str = triangle_direction)
        )]
        direction: TriangleDirection,
    },
    /// Generate a filled hexagon of hexes
    Hexagon {
        /// Distance from the center to the edge, in hexes, counting the
        /// center itself
        radius: u32,
        /// Center hex, as comma-separated cube components (`x,y` or `x,y,z`)
        #[structopt(short, long, default_value = "0,0")]
        start: HexCoord,
    },
    /// Generate a rectangle of hexes
    Rectangle {
        /// Hexes along the first (staggered) axis
        width: u32,
        /// Hexes along the second axis
        height: u32,
        /// Start hex, as comma-separated cube components (`x,y` or `x,y,z`)
        #[structopt(short, long, default_value = "0,0")]
        start: HexCoord,
        /// One of E, NE, SE, W, NW, SW. Unknown tokens fall back to E
        #[structopt(
            short,
            long,
            default_value = "E",
            parse(from_str = rectangle_direction)
        )]
        direction: CompassDirection,
    },
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    /// Cube coordinates as JSON
    Coords,
    /// Pixel centers as JSON
    Points,
    /// The grid config as TOML
    Cfg,
    /// One coordinate per line
    Text,
}

/// Full coordinate triple for JSON output. The library type only serializes
/// the stored x/y pair; consumers of the CLI get the derived z spelled out.
#[derive(Serialize)]
struct CoordRecord {
    x: i32,
    y: i32,
    z: i32,
}

/// The directions are deliberately lenient: an unrecognized token means the
/// shape's default rather than an argument error.
fn parallelogram_direction(token: &str) -> CompassDirection {
    CompassDirection::parse_lenient(
        token,
        CompassDirection::PARALLELOGRAM_DEFAULT,
    )
}

fn rectangle_direction(token: &str) -> CompassDirection {
    CompassDirection::parse_lenient(token, CompassDirection::RECTANGLE_DEFAULT)
}

fn triangle_direction(token: &str) -> TriangleDirection {
    TriangleDirection::parse_lenient(token, TriangleDirection::Down)
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the requested generator and hand back the hexes.
fn generate(grid: &Grid, shape: ShapeCommand) -> Vec<Hex> {
    match shape {
        ShapeCommand::Parallelogram {
            width,
            height,
            start,
            direction,
        } => grid.parallelogram(ParallelogramOptions {
            width,
            height,
            start,
            direction,
        }),
        ShapeCommand::Triangle {
            size,
            start,
            direction,
        } => grid.triangle(TriangleOptions {
            size,
            start,
            direction,
        }),
        ShapeCommand::Hexagon { radius, start } => {
            grid.hexagon(HexagonOptions { radius, start })
        }
        ShapeCommand::Rectangle {
            width,
            height,
            start,
            direction,
        } => grid.rectangle(RectangleOptions {
            width,
            height,
            start,
            direction,
        }),
    }
}

/// Serialize the generated hexes (or the config) in the requested format.
fn render_output(
    format: OutputFormat,
    grid: &Grid,
    hexes: &[Hex],
) -> anyhow::Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Coords => {
            let records = hexes
                .iter()
                .map(|hex| CoordRecord {
                    x: hex.x(),
                    y: hex.y(),
                    z: hex.z(),
                })
                .collect::<Vec<_>>();
            serde_json::to_vec_pretty(&records)
                .context("error serializing coordinates")?
        }
        OutputFormat::Points => {
            let points =
                hexes.iter().map(|hex| hex.to_point()).collect::<Vec<_>>();
            serde_json::to_vec_pretty(&points)
                .context("error serializing points")?
        }
        OutputFormat::Cfg => toml::to_string_pretty(grid.config())
            .context("error serializing config")?
            .into_bytes(),
        OutputFormat::Text => {
            let mut out = String::new();
            for hex in hexes {
                writeln!(out, "{}", hex)?;
            }
            out.into_bytes()
        }
    };
    Ok(bytes)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    let grid = Grid::new(config)?;

    let hexes = generate(&grid, opt.shape);
    info!("generated {} hexes", hexes.len());

    let bytes = render_output(opt.format, &grid, &hexes)?;
    match &opt.output {
        Some(output_path) => {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", output_path)
            })?;
        }
        None => io::stdout().write_all(&bytes)?,
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
