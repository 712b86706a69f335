use std::path::Path;
use std::time::Duration;

use pixel_diff::{ComparisonMode, DiffEngine, HeatmapOptions};
use serde::Deserialize;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Comparison mode used when the command line does not pick one
    #[serde(default)]
    pub mode: ComparisonMode,

    /// Per-image load timeout in seconds
    #[serde(default = "default_load_timeout")]
    pub load_timeout_secs: u64,

    /// Heatmap tunables (threshold, dimming, boost, blend curve)
    #[serde(default)]
    pub heatmap: HeatmapOptions,
}

fn default_load_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// With no path, or when the file cannot be read or parsed, a warning is
    /// logged and the defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        mode = %config.mode,
                        threshold = config.heatmap.threshold,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text. Heatmap values are sanitized.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.heatmap = config.heatmap.sanitized();
        Ok(config)
    }

    /// Per-image load timeout
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    /// Build a comparison engine from this configuration
    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new(self.mode).options(self.heatmap)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ComparisonMode::default(),
            load_timeout_secs: default_load_timeout(),
            heatmap: HeatmapOptions::default(),
        }
    }
}
