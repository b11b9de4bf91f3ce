//! 8-bit RGB framebuffer and image output.

use std::path::Path;

use crate::error::{RenderError, RenderResult};
use image::RgbImage;

/// Row-major image of quantized RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = self.index(x, y);
        self.pixels[i] = [r, g, b];
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Flat pixel storage, for splitting between render workers.
    pub fn pixels_mut(&mut self) -> &mut [[u8; 3]] {
        &mut self.pixels
    }

    /// Copy into an `image` buffer.
    pub fn to_rgb_image(&self) -> RenderResult<RgbImage> {
        let bytes: Vec<u8> = self.pixels.iter().flatten().copied().collect();
        let expected = self.width as usize * self.height as usize;
        RgbImage::from_raw(self.width, self.height, bytes).ok_or(RenderError::BufferSize {
            expected,
            actual: self.pixels.len(),
        })
    }

    /// Write the image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgb_image()?.save(path)?;
        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn test_set_get_row_major() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set_pixel(3, 1, 10, 20, 30);

        assert_eq!(fb.get_pixel(3, 1), [10, 20, 30]);
        assert_eq!(fb.pixels()[7], [10, 20, 30]);
    }

    #[test]
    fn test_to_rgb_image() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_pixel(1, 0, 255, 127, 0);

        let img = fb.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0).0, [255, 127, 0]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0]);
    }

    #[test]
    fn test_save_and_reload() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set_pixel(2, 1, 200, 100, 50);

        let path = std::env::temp_dir().join(format!("prism_fb_{}.png", std::process::id()));
        fb.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.get_pixel(2, 1).0, [200, 100, 50]);
    }

    #[test]
    fn test_save_unknown_extension_fails() {
        let fb = Framebuffer::new(1, 1);
        let path = std::env::temp_dir().join("prism_fb.not_an_image_format");

        assert!(matches!(fb.save(&path), Err(RenderError::Image(_))));
    }
}
