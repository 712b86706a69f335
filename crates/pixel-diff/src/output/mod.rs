//! Output types of a comparison.
//!
//! - [`CanvasBuffer`]: the RGBA visualization, sized to the union of both inputs
//! - [`DiffStatistics`]: changed-pixel counts and percentages
//! - [`Severity`]: a label bucket derived from the changed percentage

mod canvas;
mod severity;
mod statistics;

pub use canvas::CanvasBuffer;
pub use severity::{severity_of, Severity};
pub use statistics::DiffStatistics;
