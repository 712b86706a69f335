use std::fmt;

use serde::Serialize;

/// Human-readable bucket for how much of an image changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// No pixel changed.
    Identical,
    /// Under 0.5% changed.
    Trivial,
    /// Under 3% changed.
    Minor,
    /// Under 15% changed.
    Moderate,
    /// 15% or more changed.
    Major,
}

impl Severity {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Identical => "Identical",
            Severity::Trivial => "Trivial",
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Major => "Major",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket a changed percentage (`0.0..=100.0`) into a [`Severity`].
///
/// Breakpoints: exactly 0, below 0.5, below 3, below 15, everything else.
/// Negative or NaN input is treated as identical.
///
/// # Example
/// ```
/// use pixel_diff::{severity_of, Severity};
/// assert_eq!(severity_of(0.0), Severity::Identical);
/// assert_eq!(severity_of(0.49), Severity::Trivial);
/// assert_eq!(severity_of(0.5), Severity::Minor);
/// assert_eq!(severity_of(15.0), Severity::Major);
/// ```
pub fn severity_of(changed_percent: f64) -> Severity {
    match changed_percent {
        p if p.is_nan() || p <= 0.0 => Severity::Identical,
        p if p < 0.5 => Severity::Trivial,
        p if p < 3.0 => Severity::Minor,
        p if p < 15.0 => Severity::Moderate,
        _ => Severity::Major,
    }
}
