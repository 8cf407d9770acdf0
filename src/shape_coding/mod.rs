pub mod grid;
pub mod image;
pub mod normalizer;

use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::path::PathBuf;

pub use grid::GridLayout;
pub use image::{Rgb, RgbImage};
pub use normalizer::{AttributeBounds, FeatureNormalizer};

use crate::records::{load_gray_records, GrayRecord};
use crate::render::{Frame, Renderer};

pub const DEFAULT_INPUT: &str = "./points6D.txt";
pub const DEFAULT_OUTPUT: &str = "output.ppm";
pub const DEFAULT_SCALE: f32 = 0.05;
pub const DEFAULT_GRID_SIZE: u32 = 100;
pub const DEFAULT_CELL_SIZE: f32 = 3.0;

/// Resolved settings for one shape-coding run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeCodingConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub scale: f32,
    pub grid_size: u32,
    pub cell_size: f32,
    pub preview: Option<PathBuf>,
}

impl Default for ShapeCodingConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            scale: DEFAULT_SCALE,
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            preview: None,
        }
    }
}

impl ShapeCodingConfig {
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.grid_size, self.cell_size)
    }
}

/// The rasterised data set, ready to be saved or displayed.
#[derive(Debug, Clone)]
pub struct ShapeCoding {
    records: Vec<GrayRecord>,
    normalizer: FeatureNormalizer,
    image: RgbImage,
}

impl ShapeCoding {
    /// Computes bounds over all records, then lays them out once.
    pub fn build(records: Vec<GrayRecord>, layout: &GridLayout) -> Self {
        let normalizer = FeatureNormalizer::from_records(&records);
        debug!("Attribute bounds: {:?}", normalizer.bounds());
        let image = layout.rasterize(&records, &normalizer);
        Self {
            records,
            normalizer,
            image,
        }
    }

    /// Loads `config.input` and builds the raster. A missing file is an error.
    pub fn from_config(config: &ShapeCodingConfig) -> Result<Self> {
        let records = load_gray_records(&config.input, config.scale)?;
        Ok(Self::build(records, &config.layout()))
    }

    pub fn records(&self) -> &[GrayRecord] {
        &self.records
    }

    pub fn normalizer(&self) -> &FeatureNormalizer {
        &self.normalizer
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Hands the already rasterised buffer to the renderer; nothing is
    /// recomputed per redraw.
    pub fn redraw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        renderer.on_redraw(&Frame::Raster(&self.image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RasterRenderer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = ShapeCodingConfig::default();
        assert_eq!(config.input, PathBuf::from("./points6D.txt"));
        assert_eq!(config.output, PathBuf::from("output.ppm"));
        assert_eq!(config.layout().image_dimensions(), (300, 200));
    }

    #[test]
    fn test_from_config_loads_and_rasterizes() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "0 0 0 0 0 0")?;
        writeln!(file, "20 20 20 20 20 20")?;
        file.flush()?;

        let config = ShapeCodingConfig {
            input: file.path().to_path_buf(),
            grid_size: 2,
            ..Default::default()
        };
        let coding = ShapeCoding::from_config(&config)?;
        assert_eq!(coding.records().len(), 2);
        assert_eq!(coding.normalizer().bounds().max, [1.0; 6]);
        assert_eq!(coding.image().pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(coding.image().pixel(3, 0), Some(Rgb::gray(255)));
        Ok(())
    }

    #[test]
    fn test_from_config_missing_input_fails() {
        let config = ShapeCodingConfig {
            input: PathBuf::from("no_such_points6D.txt"),
            ..Default::default()
        };
        assert!(ShapeCoding::from_config(&config).is_err());
    }

    #[test]
    fn test_redraw_reuses_raster() -> Result<()> {
        let coding = ShapeCoding::build(
            vec![GrayRecord { attrs: [0.0; 6] }],
            &GridLayout::new(1, 3.0),
        );
        let mut renderer = RasterRenderer::new(3, 2, Rgb::WHITE, 1);
        coding.redraw(&mut renderer)?;
        coding.redraw(&mut renderer)?;
        assert_eq!(renderer.redraw_count(), 2);
        assert!(renderer.surface().pixels().iter().all(|&p| p == Rgb::BLACK));
        Ok(())
    }
}
