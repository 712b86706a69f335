use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects the classification and colorization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Byte-exact equality; changed pixels are solid magenta.
    #[default]
    Binary,
    /// Perceptual RGB distance; dimmed context with heat-tinted changes.
    Heatmap,
}

impl ComparisonMode {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonMode::Binary => "binary",
            ComparisonMode::Heatmap => "heatmap",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comparison mode '{0}' (expected 'binary' or 'heatmap')")]
pub struct ParseModeError(pub String);

impl FromStr for ComparisonMode {
    type Err = ParseModeError;

    /// Parse a mode name, case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("binary") {
            Ok(ComparisonMode::Binary)
        } else if trimmed.eq_ignore_ascii_case("heatmap") {
            Ok(ComparisonMode::Heatmap)
        } else {
            Err(ParseModeError(trimmed.to_string()))
        }
    }
}
