//! RasterImage: an immutable decoded RGBA bitmap.

use crate::api::DiffError;
use crate::color::Rgba;

/// A decoded bitmap, row-major, four bytes (R, G, B, A) per pixel.
///
/// The buffer length always equals `width * height * 4`; [`RasterImage::new`]
/// rejects anything else. Zero-sized images can be constructed, but the
/// comparison functions refuse them with [`DiffError::InvalidDimensions`].
///
/// # Example
///
/// ```
/// use pixel_diff::{RasterImage, Rgba};
///
/// let image = RasterImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// assert_eq!(image.get(1, 0), Some(Rgba::new(5, 6, 7, 8)));
///
/// // Out of bounds reads are transparent black
/// assert_eq!(image.sample(5, 5), Rgba::TRANSPARENT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA buffer.
    ///
    /// # Errors
    ///
    /// - [`DiffError::Oversized`] if `width * height * 4` overflows `usize`
    /// - [`DiffError::BufferLength`] if `pixels.len()` is not `width * height * 4`
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DiffError> {
        let expected = buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(DiffError::BufferLength {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image of the given size filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self, DiffError> {
        let len = buffer_len(width, height)?;
        let pixels = color.to_bytes().into_iter().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw RGBA buffer.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Give back the raw RGBA buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[i..i + 4];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// The pixel at `(x, y)`, or [`Rgba::TRANSPARENT`] outside the image.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Rgba {
        self.get(x, y).unwrap_or(Rgba::TRANSPARENT)
    }
}

pub(crate) fn buffer_len(width: u32, height: u32) -> Result<usize, DiffError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(DiffError::Oversized { width, height })
}
