use log::debug;

use super::image::{Rgb, RgbImage};
use super::normalizer::FeatureNormalizer;
use crate::records::{GrayRecord, GRAY_ARITY};

/// Pixels per record block horizontally (attributes 0..3 on the top row).
pub const BLOCK_WIDTH: u32 = 3;
/// Pixels per record block vertically (attributes 3..6 on the bottom row).
pub const BLOCK_HEIGHT: u32 = 2;

/// Square grid of record cells, filled row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    grid_size: u32,
    cell_size: f32,
}

impl GridLayout {
    pub fn new(grid_size: u32, cell_size: f32) -> Self {
        Self {
            grid_size,
            cell_size,
        }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Raster size: `3 * grid_size` by `2 * grid_size`.
    pub fn image_dimensions(&self) -> (u32, u32) {
        (self.grid_size * BLOCK_WIDTH, self.grid_size * BLOCK_HEIGHT)
    }

    /// Number of cells; records past this index are never placed.
    pub fn capacity(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Top-left pixel of the cell holding record `index`.
    pub fn cell_origin(&self, index: usize) -> Option<(i64, i64)> {
        if index >= self.capacity() {
            return None;
        }
        let grid = self.grid_size as usize;
        let (row, col) = (index / grid, index % grid);
        let x = (col as f32 * self.cell_size) as i64;
        let y = (row as f32 * self.cell_size) as i64;
        Some((x, y))
    }

    /// Pixel of attribute `attr` inside the block starting at `origin`.
    pub fn attribute_pixel(origin: (i64, i64), attr: usize) -> (i64, i64) {
        let dx = (attr % BLOCK_WIDTH as usize) as i64;
        let dy = (attr / BLOCK_WIDTH as usize) as i64;
        (origin.0 + dx, origin.1 + dy)
    }

    /// Paints every placeable record into a fresh white raster. Pixels that
    /// fall outside the raster are skipped.
    pub fn rasterize(&self, records: &[GrayRecord], normalizer: &FeatureNormalizer) -> RgbImage {
        let (width, height) = self.image_dimensions();
        let mut image = RgbImage::new(width, height, Rgb::WHITE);

        let mut clipped = 0usize;
        for (index, record) in records.iter().enumerate() {
            let Some(origin) = self.cell_origin(index) else {
                break;
            };
            for attr in 0..GRAY_ARITY {
                let (x, y) = Self::attribute_pixel(origin, attr);
                let gray = normalizer.normalize(attr, record.attrs[attr]);
                if !image.set_pixel(x, y, Rgb::gray(gray)) {
                    clipped += 1;
                }
            }
        }

        let dropped = records.len().saturating_sub(self.capacity());
        debug!(
            "Rasterized {} record(s) into {}x{} image ({} dropped past grid, {} pixel(s) clipped)",
            records.len() - dropped,
            width,
            height,
            dropped,
            clipped
        );
        image
    }
}
