use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One 24-bit RGB pixel.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    pub fn gray(level: u8) -> Self {
        Rgb([level, level, level])
    }

    /// Grey from a `[0, 1]` intensity; out-of-range input is clamped.
    pub fn from_intensity(intensity: f32) -> Self {
        Self::gray((intensity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// Row-major, top-to-bottom RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RgbImage {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes one pixel. Coordinates outside the raster are ignored and
    /// reported as `false`.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Raw interleaved RGB bytes, three per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn flipped_vertically(&self) -> Self {
        let row = self.width as usize;
        let mut pixels = Vec::with_capacity(self.pixels.len());
        if row > 0 {
            for line in self.pixels.chunks_exact(row).rev() {
                pixels.extend_from_slice(line);
            }
        }
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Binary PPM: `P6\n<w> <h>\n255\n` followed by the raw pixel bytes.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(self.as_bytes())?;
        writer.flush()
    }

    pub fn save_ppm(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Unable to create file {:?}", path))?;
        self.write_ppm(BufWriter::new(file))
            .with_context(|| format!("Failed to write PPM image to {:?}", path))?;
        log::info!(
            "Wrote {}x{} PPM image to {:?}",
            self.width,
            self.height,
            path
        );
        Ok(())
    }
}
