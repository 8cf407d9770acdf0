use clap::Parser;
use std::path::PathBuf;

use crate::shape_coding::{self, ShapeCodingConfig};
use crate::spiral::{self, Query, SpiralConfig, SpiralParams};

/// Lay 6-attribute records out as 3x2 grey pixel blocks and save a PPM image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ShapeCodingCli {
    /// Whitespace-separated input file, six numbers per record
    #[arg(short, long, default_value = shape_coding::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the PPM image
    #[arg(short, long, default_value = shape_coding::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Multiplier applied to every value at load time
    #[arg(long, default_value_t = shape_coding::DEFAULT_SCALE)]
    pub scale: f32,

    /// Records per grid row and column
    #[arg(long, default_value_t = shape_coding::DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Pixel pitch between grid cells
    #[arg(long, default_value_t = shape_coding::DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Also save what the display window shows
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

impl From<ShapeCodingCli> for ShapeCodingConfig {
    fn from(cli: ShapeCodingCli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            scale: cli.scale,
            grid_size: cli.grid_size,
            cell_size: cli.cell_size,
            preview: cli.preview,
        }
    }
}

/// Score 5-dimensional records against a query and show them on rectangular spirals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SpiralCli {
    /// Whitespace-separated input file of integers, five per record
    #[arg(short, long, default_value = spiral::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Query vector, e.g. "1,2,3,4,5"; prompted on stdin when omitted
    #[arg(short, long)]
    pub query: Option<Query>,

    /// Window width in pixels
    #[arg(long, default_value_t = spiral::WINDOW_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = spiral::WINDOW_HEIGHT)]
    pub height: u32,

    /// Side length of each drawn point in pixels
    #[arg(long, default_value_t = spiral::POINT_SIZE)]
    pub point_size: u32,

    /// Spiral step at the 800x600 reference size
    #[arg(long, default_value_t = spiral::layout::STEP_SIZE)]
    pub step_size: f32,

    /// Render one frame of the six sub-views and save it as PPM
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Print the sorted records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SpiralCli {
    /// Splits off the query so the rest can become a config.
    pub fn into_parts(self) -> (SpiralConfig, Option<Query>) {
        let config = SpiralConfig {
            input: self.input,
            window_width: self.width,
            window_height: self.height,
            point_size: self.point_size,
            params: SpiralParams {
                step_size: self.step_size,
                ..SpiralParams::default()
            },
            snapshot: self.snapshot,
            json: self.json,
        };
        (config, self.query)
    }
}

pub fn parse_shape_coding_args() -> ShapeCodingCli {
    ShapeCodingCli::parse()
}

pub fn parse_spiral_args() -> SpiralCli {
    SpiralCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_coding_defaults() {
        let cli = ShapeCodingCli::try_parse_from(["shape_coding"]).unwrap();
        assert_eq!(ShapeCodingConfig::from(cli), ShapeCodingConfig::default());
    }

    #[test]
    fn test_spiral_defaults() {
        let cli = SpiralCli::try_parse_from(["spiral_view"]).unwrap();
        let (config, query) = cli.into_parts();
        assert_eq!(config, SpiralConfig::default());
        assert!(query.is_none());
    }

    #[test]
    fn test_spiral_query_flag() {
        let cli = SpiralCli::try_parse_from(["spiral_view", "--query", "1,2,3,4,5"]).unwrap();
        let (_, query) = cli.into_parts();
        assert_eq!(query, Some(Query::new([1, 2, 3, 4, 5])));
    }

    #[test]
    fn test_spiral_rejects_short_query_flag() {
        let result = SpiralCli::try_parse_from(["spiral_view", "--query", "1,2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_spiral_help_describes_every_flag() {
        use clap::CommandFactory;
        let command = SpiralCli::command();
        for arg in command.get_arguments() {
            if matches!(arg.get_id().as_str(), "help" | "version") {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{} has no help text", arg.get_id());
        }
    }

    #[test]
    fn test_shape_coding_overrides() {
        let cli = ShapeCodingCli::try_parse_from([
            "shape_coding",
            "--input",
            "data.txt",
            "--grid-size",
            "10",
            "--preview",
            "window.ppm",
        ])
        .unwrap();
        let config = ShapeCodingConfig::from(cli);
        assert_eq!(config.input, PathBuf::from("data.txt"));
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.preview, Some(PathBuf::from("window.ppm")));
    }
}
