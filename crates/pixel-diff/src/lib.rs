//! pixel-diff: Pixel-level comparison of two raster images
//!
//! This library compares a "before" and an "after" image and produces a
//! visualization of what changed together with change statistics. It does
//! no decoding, no I/O and holds no global state: callers hand in decoded
//! RGBA buffers and get back a [`CanvasBuffer`] and [`DiffStatistics`].
//!
//! # Quick Start
//!
//! ```
//! use pixel_diff::{compare, ComparisonMode, RasterImage};
//!
//! let before = RasterImage::new(1, 2, vec![255, 0, 0, 255, 255, 0, 0, 255]).unwrap();
//! let after = RasterImage::new(1, 2, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
//!
//! let output = compare(&before, &after, ComparisonMode::Binary).unwrap();
//!
//! assert_eq!(output.statistics.changed_pixel_count, 1);
//! assert_eq!(output.statistics.changed_percent_text(), "50.00");
//! assert_eq!(output.canvas.pixel(0, 1).to_bytes(), [255, 0, 255, 255]);
//! ```
//!
//! # Configured Engine
//!
//! [`DiffEngine`] carries a mode and the heatmap tunables and can be reused
//! across any number of comparisons:
//!
//! ```
//! use pixel_diff::{ComparisonMode, DiffEngine, RasterImage, Severity};
//!
//! let engine = DiffEngine::new(ComparisonMode::Heatmap).threshold(0.025).dim(0.3);
//!
//! let image = RasterImage::new(2, 2, vec![90; 16]).unwrap();
//! let output = engine.compare(&image, &image).unwrap();
//!
//! assert_eq!(output.statistics.changed_pixel_count, 0);
//! assert_eq!(output.statistics.severity(), Severity::Identical);
//! ```
//!
//! # Differing Dimensions
//!
//! The canvas is as wide as the wider input and as tall as the taller one.
//! Reading outside an image yields a transparent `(0, 0, 0, 0)` sample, and
//! any position that only one of the two images covers is reported as
//! changed: content that appeared or disappeared is always a change.
//!
//! # Comparison Modes
//!
//! | Mode | Classification | Unchanged pixel | Changed pixel |
//! |------|----------------|-----------------|---------------|
//! | [`ComparisonMode::Binary`] | any of R, G, B, A differs | `(0, 0, 0, 0)` | magenta `(255, 0, 255, 255)` |
//! | [`ComparisonMode::Heatmap`] | `norm >= threshold` | after RGB dimmed, opaque | after RGB blended with a heat color, opaque |
//!
//! ## Normalized Delta
//!
//! Heatmap mode measures each pixel by its Euclidean distance in RGB,
//! ignoring alpha, divided by the largest possible distance:
//!
//! ```text
//! delta = sqrt((r1 - r2)^2 + (g1 - g2)^2 + (b1 - b2)^2)
//! norm  = min(delta / (255 * sqrt(3)), 1)
//! ```
//!
//! ## Heat Gradient
//!
//! Changed pixels are tinted along a two-segment gradient. The normalized
//! delta is first boosted so that small differences are still visible:
//!
//! ```text
//! t = min(norm * boost, 1)
//!
//! t = 0.0   green  (  0, 210, 90)
//! t = 0.5   amber  (255, 180,  0)
//! t = 1.0   red    (255,  20,  0)
//!
//! alpha = min(blend_base + norm * blend_slope, blend_cap)
//! out   = after * (1 - alpha) + heat * alpha
//! ```
//!
//! **Tuning constants:** `threshold = 0.02, dim = 0.4, boost = 2.5,
//! blend_base = 0.5, blend_slope = 0.35, blend_cap = 0.9`. All of them can
//! be overridden through [`HeatmapOptions`].
//!
//! # Statistics
//!
//! [`DiffStatistics`] counts changed pixels, reports the changed share
//! rounded to two decimals and, in heatmap mode, the mean normalized delta
//! rounded to one decimal. [`severity_of`] buckets the changed share into
//! a [`Severity`] label.

pub mod api;
pub mod color;
pub mod diff;
pub mod image;
pub mod output;


pub use api::{compare, DiffEngine, DiffError, DiffOutput};
pub use color::Rgba;
pub use diff::{ComparisonMode, HeatmapOptions, ParseModeError};
pub use image::RasterImage;
pub use output::{severity_of, CanvasBuffer, DiffStatistics, Severity};
