//! DiffEngine builder -- the primary entry point for the crate.
//!
//! [`DiffEngine`] wraps the comparison pass with fluent configuration of
//! the mode and heatmap tunables.

use crate::api::DiffError;
use crate::diff::{diff_pixels, Binary, ComparisonMode, Heatmap, HeatmapOptions};
use crate::image::RasterImage;
use crate::output::{CanvasBuffer, DiffStatistics};

/// Result of a successful comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOutput {
    /// The visualization, sized to the union of both inputs.
    pub canvas: CanvasBuffer,
    /// Counts and percentages gathered during the same pass.
    pub statistics: DiffStatistics,
}

impl DiffOutput {
    /// Split into `(canvas, statistics)`.
    pub fn into_parts(self) -> (CanvasBuffer, DiffStatistics) {
        (self.canvas, self.statistics)
    }
}

/// High-level comparison builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`compare()`](Self::compare) takes `&self`, so one engine can serve any
///   number of comparisons, from any number of threads
/// - Heatmap tunables are kept even while the mode is binary, so switching
///   modes does not lose them
///
/// # Example
///
/// ```
/// use pixel_diff::{ComparisonMode, DiffEngine, RasterImage};
///
/// let before = RasterImage::new(1, 1, vec![0, 0, 0, 255]).unwrap();
/// let after = RasterImage::new(1, 1, vec![255, 255, 255, 255]).unwrap();
///
/// let engine = DiffEngine::new(ComparisonMode::Heatmap).boost(3.0);
/// let output = engine.compare(&before, &after).unwrap();
///
/// assert_eq!(output.statistics.changed_percent_text(), "100.00");
/// assert_eq!(output.statistics.average_intensity_text().as_deref(), Some("100.0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    mode: ComparisonMode,
    heatmap: HeatmapOptions,
}

impl DiffEngine {
    /// Create an engine for `mode` with default heatmap options.
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            heatmap: HeatmapOptions::default(),
        }
    }

    /// The mode in effect.
    #[inline]
    pub fn comparison_mode(&self) -> ComparisonMode {
        self.mode
    }

    /// The heatmap options in effect.
    #[inline]
    pub fn heatmap_options(&self) -> &HeatmapOptions {
        &self.heatmap
    }

    /// Switch the comparison mode.
    #[inline]
    pub fn mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace all heatmap options at once. Values are sanitized.
    #[inline]
    pub fn options(mut self, options: HeatmapOptions) -> Self {
        self.heatmap = options.sanitized();
        self
    }

    /// Set the heatmap change threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.heatmap = self.heatmap.threshold(threshold);
        self
    }

    /// Set the heatmap dimming factor for unchanged pixels.
    #[inline]
    pub fn dim(mut self, dim: f32) -> Self {
        self.heatmap = self.heatmap.dim(dim);
        self
    }

    /// Set the heatmap gradient boost.
    #[inline]
    pub fn boost(mut self, boost: f32) -> Self {
        self.heatmap = self.heatmap.boost(boost);
        self
    }

    /// Compare `before` against `after`.
    ///
    /// The canvas is `max(width) x max(height)`; every position is
    /// classified exactly once.
    ///
    /// # Errors
    ///
    /// [`DiffError::InvalidDimensions`] if either image has a zero width or
    /// height.
    pub fn compare(
        &self,
        before: &RasterImage,
        after: &RasterImage,
    ) -> Result<DiffOutput, DiffError> {
        if before.is_empty() || after.is_empty() {
            return Err(DiffError::InvalidDimensions {
                before: (before.width(), before.height()),
                after: (after.width(), after.height()),
            });
        }

        let (canvas, tally) = match self.mode {
            ComparisonMode::Binary => diff_pixels(before, after, &Binary),
            ComparisonMode::Heatmap => diff_pixels(before, after, &Heatmap::new(self.heatmap)),
        };

        let total = canvas.width() as u64 * canvas.height() as u64;
        let statistics =
            DiffStatistics::from_tally(tally, total, self.mode == ComparisonMode::Heatmap);

        tracing::debug!(
            mode = %self.mode,
            width = canvas.width(),
            height = canvas.height(),
            changed = statistics.changed_pixel_count,
            percent = statistics.changed_percent,
            "Compared images"
        );

        Ok(DiffOutput { canvas, statistics })
    }
}

/// Compare two images with default heatmap options.
///
/// Shortcut for `DiffEngine::new(mode).compare(before, after)`.
///
/// # Errors
///
/// [`DiffError::InvalidDimensions`] if either image has a zero width or
/// height.
pub fn compare(
    before: &RasterImage,
    after: &RasterImage,
    mode: ComparisonMode,
) -> Result<DiffOutput, DiffError> {
    DiffEngine::new(mode).compare(before, after)
}
