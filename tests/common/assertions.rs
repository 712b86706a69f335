//! Assertion helpers for tests.

use pixel_diff::{CanvasBuffer, Rgba};
use pretty_assertions::assert_eq;
use visidiff::rendering::DiffReport;

/// Assert bytes carry the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert one canvas position has the expected color
pub fn assert_canvas_pixel(canvas: &CanvasBuffer, x: u32, y: u32, expected: Rgba) {
    assert_eq!(
        canvas.pixel(x, y),
        expected,
        "Unexpected canvas color at ({x}, {y})"
    );
}

/// Assert the changed/total counts and formatted percentage of a report
pub fn assert_counts(report: &DiffReport, changed: u64, total: u64, percent: &str) {
    assert_eq!(
        (
            report.statistics.changed_pixel_count,
            report.statistics.total_pixel_count,
            report.statistics.changed_percent_text(),
        ),
        (changed, total, percent.to_string()),
        "Unexpected statistics. Full report: {report}"
    );
}

/// Assert nothing changed at all
pub fn assert_identical(report: &DiffReport) {
    assert_eq!(report.statistics.changed_pixel_count, 0, "Report: {report}");
    assert_eq!(report.severity.label(), "Identical");
}
