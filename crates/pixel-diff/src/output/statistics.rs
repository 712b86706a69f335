//! Change statistics for one comparison.

use serde::Serialize;

use super::severity::{severity_of, Severity};
use crate::diff::Tally;

/// Quantitative summary of a comparison.
///
/// Derived from the classification pass; recomputed for every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiffStatistics {
    /// Positions classified as changed.
    pub changed_pixel_count: u64,
    /// Canvas width times canvas height.
    pub total_pixel_count: u64,
    /// `changed / total * 100`, rounded to two decimals.
    pub changed_percent: f64,
    /// Mean normalized delta in percent, rounded to one decimal.
    ///
    /// Only present for heatmap comparisons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_intensity_percent: Option<f64>,
}

impl DiffStatistics {
    pub(crate) fn from_tally(tally: Tally, total: u64, with_intensity: bool) -> Self {
        let changed_percent = round_to(percent(tally.changed as f64, total), 2);
        let average_intensity_percent =
            with_intensity.then(|| round_to(percent(tally.norm_sum, total), 1));
        Self {
            changed_pixel_count: tally.changed,
            total_pixel_count: total,
            changed_percent,
            average_intensity_percent,
        }
    }

    /// Changed share formatted with two decimals, e.g. `"50.00"`.
    pub fn changed_percent_text(&self) -> String {
        format!("{:.2}", self.changed_percent)
    }

    /// Average intensity formatted with one decimal, e.g. `"12.5"`.
    pub fn average_intensity_text(&self) -> Option<String> {
        self.average_intensity_percent.map(|p| format!("{p:.1}"))
    }

    /// Severity bucket of the changed share.
    ///
    /// Any changed pixel is at least [`Severity::Trivial`], even when the
    /// share rounds to `0.00`.
    pub fn severity(&self) -> Severity {
        match severity_of(self.changed_percent) {
            Severity::Identical if self.changed_pixel_count > 0 => Severity::Trivial,
            severity => severity,
        }
    }
}

fn percent(part: f64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part / total as f64 * 100.0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
