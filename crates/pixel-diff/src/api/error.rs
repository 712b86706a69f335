//! Error type for the pixel-diff public API.

use thiserror::Error;

/// Errors raised by image construction and comparison.
///
/// Comparison fails before producing any output; there are no partial
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// One of the inputs has a zero width or height.
    #[error(
        "invalid image dimensions: before is {}x{}, after is {}x{}",
        .before.0, .before.1, .after.0, .after.1
    )]
    InvalidDimensions {
        /// `(width, height)` of the before image
        before: (u32, u32),
        /// `(width, height)` of the after image
        after: (u32, u32),
    },

    /// A pixel buffer does not hold exactly `width * height * 4` bytes.
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// `width * height * 4` does not fit in memory addressing.
    #[error("image dimensions {width}x{height} are too large")]
    Oversized { width: u32, height: u32 },
}
