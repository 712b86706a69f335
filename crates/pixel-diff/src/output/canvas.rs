//! CanvasBuffer: the difference visualization.

use crate::color::Rgba;

/// RGBA visualization produced by a comparison.
///
/// Same layout as [`RasterImage`](crate::RasterImage): row-major, four bytes
/// per pixel. A fresh canvas is fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CanvasBuffer {
    /// Allocate a transparent canvas.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA buffer, `width * height * 4` bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Give back the raw RGBA buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = self.index(x, y);
        let px = &self.pixels[i..i + 4];
        Rgba::new(px[0], px[1], px[2], px[3])
    }

    #[inline]
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.pixels[i..i + 4].copy_from_slice(&color.to_bytes());
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }
}
