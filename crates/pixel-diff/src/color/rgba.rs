//! 8-bit RGBA sample type

/// Largest possible Euclidean RGB distance, `255 * sqrt(3)`.
pub const MAX_RGB_DISTANCE: f32 = 441.672_96;

/// Square of [`MAX_RGB_DISTANCE`], exact in `f32`.
const MAX_RGB_DISTANCE_SQ: f32 = 3.0 * 255.0 * 255.0;

/// A single pixel in R, G, B, A byte order.
///
/// This is the unit that image buffers are made of. Comparisons read two
/// `Rgba` samples (one per image) and write one to the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black. Also the value read outside an image.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Highlight color for changed pixels in binary mode.
    pub const MAGENTA: Rgba = Rgba::new(255, 0, 255, 255);

    /// Create a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a `[R, G, B, A]` byte array.
    ///
    /// # Example
    /// ```
    /// use pixel_diff::Rgba;
    /// let red = Rgba::from_bytes([255, 0, 0, 255]);
    /// assert_eq!(red.r, 255);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Euclidean distance between the RGB parts of two colors.
    ///
    /// Alpha does not contribute.
    #[inline]
    pub fn rgb_distance(self, other: Rgba) -> f32 {
        self.rgb_distance_sq(other).sqrt()
    }

    #[inline]
    fn rgb_distance_sq(self, other: Rgba) -> f32 {
        let dr = self.r as f32 - other.r as f32;
        let dg = self.g as f32 - other.g as f32;
        let db = self.b as f32 - other.b as f32;
        dr * dr + dg * dg + db * db
    }

    /// RGB distance as a fraction of [`MAX_RGB_DISTANCE`], clamped to `0.0..=1.0`.
    ///
    /// # Example
    /// ```
    /// use pixel_diff::Rgba;
    /// let black = Rgba::new(0, 0, 0, 255);
    /// let white = Rgba::new(255, 255, 255, 255);
    /// assert_eq!(black.normalized_distance(white), 1.0);
    /// assert_eq!(black.normalized_distance(black), 0.0);
    /// ```
    #[inline]
    pub fn normalized_distance(self, other: Rgba) -> f32 {
        // Dividing the squares keeps black vs. white at exactly 1.0.
        (self.rgb_distance_sq(other) / MAX_RGB_DISTANCE_SQ).sqrt().min(1.0)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}
