use std::fmt;

use pixel_diff::{ComparisonMode, DiffOutput, DiffStatistics, RasterImage, Severity};
use serde::Serialize;

/// Width and height of an image or canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything a viewer shows next to the diff image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffReport {
    pub mode: ComparisonMode,
    pub before: Dimensions,
    pub after: Dimensions,
    pub canvas: Dimensions,
    pub statistics: DiffStatistics,
    pub severity: Severity,
}

impl DiffReport {
    pub fn new(
        mode: ComparisonMode,
        before: &RasterImage,
        after: &RasterImage,
        output: &DiffOutput,
    ) -> Self {
        Self {
            mode,
            before: Dimensions {
                width: before.width(),
                height: before.height(),
            },
            after: Dimensions {
                width: after.width(),
                height: after.height(),
            },
            canvas: Dimensions {
                width: output.canvas.width(),
                height: output.canvas.height(),
            },
            statistics: output.statistics,
            severity: output.statistics.severity(),
        }
    }

    /// True when the two inputs differ in size
    pub fn size_changed(&self) -> bool {
        self.before != self.after
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} pixels changed ({}%), severity {}",
            self.statistics.changed_pixel_count,
            self.statistics.total_pixel_count,
            self.statistics.changed_percent_text(),
            self.severity
        )?;
        if let Some(intensity) = self.statistics.average_intensity_text() {
            write!(f, ", average intensity {intensity}%")?;
        }
        if self.size_changed() {
            write!(f, " [size {} -> {}]", self.before, self.after)?;
        }
        Ok(())
    }
}
