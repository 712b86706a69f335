//! Pixel classification and colorization.
//!
//! A [`Classifier`] looks at the before/after samples of one position and
//! decides whether it changed and what the output pixel looks like. Two
//! implementations exist, selected by [`ComparisonMode`]:
//!
//! - [`Binary`]: byte-exact equality, magenta highlight
//! - [`Heatmap`]: perceptual distance, dimmed context plus heat tint
//!
//! [`diff_pixels`] drives a classifier over the full canvas exactly once.

mod binary;
mod heatmap;
mod mode;
mod options;

pub use binary::Binary;
pub use heatmap::Heatmap;
pub use mode::{ComparisonMode, ParseModeError};
pub use options::HeatmapOptions;

use crate::color::Rgba;
use crate::image::RasterImage;
use crate::output::CanvasBuffer;

/// Outcome of classifying a single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelOutcome {
    /// Color written to the canvas.
    pub color: Rgba,
    /// Whether the position counts as changed.
    pub changed: bool,
    /// Normalized delta in `0.0..=1.0` (only meaningful in heatmap mode).
    pub norm: f32,
}

/// Per-position classification policy.
///
/// `before` and `after` are `None` where the position lies outside that
/// image. Implementations must treat a position covered by exactly one
/// image as changed.
pub trait Classifier {
    /// Classify one position and produce its output color.
    fn classify(&self, before: Option<Rgba>, after: Option<Rgba>) -> PixelOutcome;
}

/// Running totals collected while the canvas is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    /// Positions classified as changed.
    pub changed: u64,
    /// Sum of the normalized deltas of all positions.
    pub norm_sum: f64,
}

/// Run `classifier` over every position of the union canvas.
///
/// The canvas is `max(width) x max(height)`. Each position is visited once,
/// in row-major order, with no early exit.
pub fn diff_pixels<C: Classifier + ?Sized>(
    before: &RasterImage,
    after: &RasterImage,
    classifier: &C,
) -> (CanvasBuffer, Tally) {
    let width = before.width().max(after.width());
    let height = before.height().max(after.height());
    let mut canvas = CanvasBuffer::new(width, height);
    let mut tally = Tally::default();

    for y in 0..height {
        for x in 0..width {
            let outcome = classifier.classify(before.get(x, y), after.get(x, y));
            if outcome.changed {
                tally.changed += 1;
            }
            tally.norm_sum += outcome.norm as f64;
            canvas.set_pixel(x, y, outcome.color);
        }
    }

    (canvas, tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Marks everything changed, so the loop bookkeeping is observable.
    struct AllChanged;

    impl Classifier for AllChanged {
        fn classify(&self, _before: Option<Rgba>, _after: Option<Rgba>) -> PixelOutcome {
            PixelOutcome {
                color: Rgba::new(1, 2, 3, 4),
                changed: true,
                norm: 0.5,
            }
        }
    }

    #[test]
    fn test_visits_every_position_once() {
        let before = RasterImage::filled(3, 2, Rgba::TRANSPARENT).unwrap();
        let after = RasterImage::filled(2, 4, Rgba::TRANSPARENT).unwrap();

        let (canvas, tally) = diff_pixels(&before, &after, &AllChanged);

        assert_eq!((canvas.width(), canvas.height()), (3, 4));
        assert_eq!(tally.changed, 12);
        assert!((tally.norm_sum - 6.0).abs() < 1e-9);
        assert!(canvas.pixels().chunks(4).all(|px| px == [1, 2, 3, 4]));
    }

    #[test]
    fn test_coverage_passed_to_classifier() {
        struct CoverageProbe;
        impl Classifier for CoverageProbe {
            fn classify(&self, before: Option<Rgba>, after: Option<Rgba>) -> PixelOutcome {
                let code = match (before, after) {
                    (Some(_), Some(_)) => 3,
                    (Some(_), None) => 1,
                    (None, Some(_)) => 2,
                    (None, None) => 0,
                };
                PixelOutcome {
                    color: Rgba::new(code, 0, 0, 0),
                    changed: false,
                    norm: 0.0,
                }
            }
        }

        let before = RasterImage::filled(2, 1, Rgba::TRANSPARENT).unwrap();
        let after = RasterImage::filled(1, 2, Rgba::TRANSPARENT).unwrap();
        let (canvas, _) = diff_pixels(&before, &after, &CoverageProbe);

        assert_eq!(canvas.pixel(0, 0).r, 3);
        assert_eq!(canvas.pixel(1, 0).r, 1);
        assert_eq!(canvas.pixel(0, 1).r, 2);
        assert_eq!(canvas.pixel(1, 1).r, 0);
    }
}
