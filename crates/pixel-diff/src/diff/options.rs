//! Heatmap tuning options.
//!
//! This module provides the [`HeatmapOptions`] struct holding every tunable
//! constant of the heatmap classifier.

use serde::{Deserialize, Serialize};

/// Tunable constants for [`ComparisonMode::Heatmap`](crate::ComparisonMode::Heatmap).
///
/// # Defaults
///
/// - `threshold`: 0.02 (2% of the maximum RGB distance counts as a change)
/// - `dim`: 0.4 (unchanged pixels shown at 40% brightness)
/// - `boost`: 2.5 (heat gradient saturates at `norm = 0.4`)
/// - `blend_base` / `blend_slope` / `blend_cap`: 0.5 / 0.35 / 0.9
///
/// # Example
///
/// ```
/// use pixel_diff::HeatmapOptions;
///
/// let options = HeatmapOptions::new().threshold(0.025).boost(3.0);
/// assert_eq!(options.threshold, 0.025);
/// assert_eq!(options.dim, 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapOptions {
    /// Normalized deltas strictly below this are unchanged.
    ///
    /// Clamped to `0.0..=1.0`. Default: `0.02`
    pub threshold: f32,

    /// Brightness multiplier for unchanged pixels.
    ///
    /// Clamped to `0.0..=1.0`. Default: `0.4`
    pub dim: f32,

    /// Multiplier applied to the normalized delta before the gradient lookup.
    ///
    /// Must be positive. Default: `2.5`
    pub boost: f32,

    /// Heat-color weight at zero delta.
    ///
    /// Clamped to `0.0..=1.0`. Default: `0.5`
    pub blend_base: f32,

    /// Additional heat-color weight per unit of normalized delta.
    ///
    /// Clamped to `>= 0.0`. Default: `0.35`
    pub blend_slope: f32,

    /// Upper bound on the heat-color weight.
    ///
    /// Clamped to `0.0..=1.0`. Default: `0.9`
    pub blend_cap: f32,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            threshold: 0.02,
            dim: 0.4,
            boost: 2.5,
            blend_base: 0.5,
            blend_slope: 0.35,
            blend_cap: 0.9,
        }
    }
}

impl HeatmapOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the change threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = clamp_unit(threshold, 0.02);
        self
    }

    /// Set the dimming factor for unchanged pixels.
    #[inline]
    pub fn dim(mut self, dim: f32) -> Self {
        self.dim = clamp_unit(dim, 0.4);
        self
    }

    /// Set the gradient boost. Non-positive or non-finite values are ignored.
    #[inline]
    pub fn boost(mut self, boost: f32) -> Self {
        if boost.is_finite() && boost > 0.0 {
            self.boost = boost;
        }
        self
    }

    /// Set the blend weight curve `min(base + norm * slope, cap)`.
    #[inline]
    pub fn blend(mut self, base: f32, slope: f32, cap: f32) -> Self {
        self.blend_base = clamp_unit(base, 0.5);
        self.blend_slope = if slope.is_finite() { slope.max(0.0) } else { 0.35 };
        self.blend_cap = clamp_unit(cap, 0.9);
        self
    }

    /// Re-apply the setter ranges, e.g. after deserializing user input.
    pub fn sanitized(self) -> Self {
        Self::default()
            .threshold(self.threshold)
            .dim(self.dim)
            .boost(self.boost)
            .blend(self.blend_base, self.blend_slope, self.blend_cap)
    }

    /// Heat-color weight for a normalized delta.
    #[inline]
    pub fn blend_alpha(&self, norm: f32) -> f32 {
        (self.blend_base + norm * self.blend_slope).min(self.blend_cap)
    }
}

#[inline]
fn clamp_unit(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
