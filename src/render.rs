//! Boundary to whatever owns the window and event loop.
//!
//! The pipelines hand a [`Frame`] to a [`Renderer`] on every redraw and
//! forward resize events to it; nothing here depends on a windowing library.
//! [`RasterRenderer`] is a headless implementation that draws into an
//! [`RgbImage`] surface, addressed the way the display addresses it: origin at
//! the bottom-left, y growing upwards.

use anyhow::Result;
use log::trace;

use crate::shape_coding::image::{Rgb, RgbImage};
use crate::spiral::views::{SubViewFrame, Viewport};

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    /// A finished raster, blitted from the bottom-left corner upwards.
    Raster(&'a RgbImage),
    /// Point sub-views, each drawn inside its own viewport.
    Points(&'a [SubViewFrame]),
}

pub trait Renderer {
    fn on_resize(&mut self, width: u32, height: u32);
    fn on_redraw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Software renderer drawing into an in-memory surface.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    surface: RgbImage,
    background: Rgb,
    point_size: u32,
    redraws: usize,
}

impl RasterRenderer {
    pub fn new(width: u32, height: u32, background: Rgb, point_size: u32) -> Self {
        Self {
            surface: RgbImage::new(width, height, background),
            background,
            point_size: point_size.max(1),
            redraws: 0,
        }
    }

    /// The surface as a top-to-bottom raster, ready to be written out.
    pub fn surface(&self) -> &RgbImage {
        &self.surface
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Sets a pixel given bottom-up surface coordinates.
    fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        let row = self.surface.height() as i64 - 1 - y;
        self.surface.set_pixel(x, row, color);
    }

    fn blit(&mut self, image: &RgbImage) {
        let (width, height) = (image.width() as i64, image.height() as i64);
        for row in 0..height {
            for col in 0..width {
                if let Some(color) = image.pixel(col, row) {
                    // Buffer row 0 lands on the bottom scanline.
                    self.plot(col, row, color);
                }
            }
        }
    }

    fn draw_sub_view(&mut self, frame: &SubViewFrame) {
        let Viewport {
            x: vx,
            y: vy,
            width: vw,
            height: vh,
        } = frame.viewport;
        let size = self.point_size as f32;

        for point in &frame.points {
            let color = Rgb::from_intensity(point.intensity);
            let left = (point.x - size / 2.0).floor() as i64;
            let bottom = (point.y - size / 2.0).floor() as i64;
            for dy in 0..self.point_size as i64 {
                for dx in 0..self.point_size as i64 {
                    let (px, py) = (left + dx, bottom + dy);
                    if px < 0 || py < 0 || px >= vw as i64 || py >= vh as i64 {
                        continue;
                    }
                    self.plot(vx as i64 + px, vy as i64 + py, color);
                }
            }
        }
    }
}

impl Renderer for RasterRenderer {
    fn on_resize(&mut self, width: u32, height: u32) {
        trace!("Resizing raster surface to {}x{}", width, height);
        self.surface = RgbImage::new(width, height, self.background);
    }

    fn on_redraw(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.surface.fill(self.background);
        match frame {
            Frame::Raster(image) => self.blit(image),
            Frame::Points(sub_views) => {
                for sub_view in sub_views.iter() {
                    self.draw_sub_view(sub_view);
                }
            }
        }
        self.redraws += 1;
        Ok(())
    }
}
