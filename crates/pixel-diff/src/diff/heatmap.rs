//! Perceptual-distance classification with a heat overlay.

use super::{Classifier, HeatmapOptions, PixelOutcome};
use crate::color::heat::{blend, dim, heat_color};
use crate::color::Rgba;

/// Heatmap classifier.
///
/// The normalized RGB delta decides the class: below
/// [`HeatmapOptions::threshold`] the position shows the after image dimmed
/// for context, otherwise the after color blended toward the heat gradient.
/// The missing side of a position covered by only one image reads as
/// [`Rgba::TRANSPARENT`]; such a position is always changed, whatever its
/// delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heatmap {
    options: HeatmapOptions,
}

impl Heatmap {
    /// Create a heatmap classifier with the given options.
    pub fn new(options: HeatmapOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    pub fn options(&self) -> &HeatmapOptions {
        &self.options
    }
}

impl Classifier for Heatmap {
    fn classify(&self, before: Option<Rgba>, after: Option<Rgba>) -> PixelOutcome {
        let covered_by_both = before.is_some() && after.is_some();
        let before = before.unwrap_or(Rgba::TRANSPARENT);
        let after = after.unwrap_or(Rgba::TRANSPARENT);
        let norm = before.normalized_distance(after);

        if covered_by_both && norm < self.options.threshold {
            return PixelOutcome {
                color: dim(after, self.options.dim),
                changed: false,
                norm,
            };
        }

        let t = (norm * self.options.boost).min(1.0);
        let alpha = self.options.blend_alpha(norm);
        PixelOutcome {
            color: blend(after, heat_color(t), alpha),
            changed: true,
            norm,
        }
    }
}
