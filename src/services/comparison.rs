use std::sync::Arc;
use std::time::Duration;

use pixel_diff::{CanvasBuffer, DiffEngine, RasterImage};

use crate::error::{CompareError, LoadError, Side};
use crate::models::AppConfig;
use crate::rendering::DiffReport;
use crate::services::ImageLoader;

/// Output of a full comparison: the canvas to paint plus its report
#[derive(Debug, Clone)]
pub struct Comparison {
    pub canvas: CanvasBuffer,
    pub report: DiffReport,
}

/// Load → compare pipeline.
///
/// Both images are loaded concurrently, each under its own timeout. The
/// CPU-bound comparison then runs in a blocking context so it never stalls
/// the async runtime.
pub struct ComparisonService {
    loader: Arc<dyn ImageLoader>,
    engine: DiffEngine,
    load_timeout: Duration,
}

impl ComparisonService {
    pub fn new(loader: Arc<dyn ImageLoader>, engine: DiffEngine, load_timeout: Duration) -> Self {
        Self {
            loader,
            engine,
            load_timeout,
        }
    }

    pub fn from_config(loader: Arc<dyn ImageLoader>, config: &AppConfig) -> Self {
        Self::new(loader, config.engine(), config.load_timeout())
    }

    pub fn engine(&self) -> &DiffEngine {
        &self.engine
    }

    /// Load both images and compare them
    pub async fn compare_locators(
        &self,
        before: &str,
        after: &str,
    ) -> Result<Comparison, CompareError> {
        let (before_image, after_image) = self.load_pair(before, after).await?;
        self.compare_images(before_image, after_image).await
    }

    /// Load both images concurrently
    pub async fn load_pair(
        &self,
        before: &str,
        after: &str,
    ) -> Result<(RasterImage, RasterImage), CompareError> {
        let (before_result, after_result) =
            tokio::join!(self.load_one(before), self.load_one(after));

        let before_image = before_result.map_err(|e| CompareError::load(Side::Before, e))?;
        let after_image = after_result.map_err(|e| CompareError::load(Side::After, e))?;
        Ok((before_image, after_image))
    }

    async fn load_one(&self, locator: &str) -> Result<RasterImage, LoadError> {
        match tokio::time::timeout(self.load_timeout, self.loader.load(locator)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(locator, timeout = ?self.load_timeout, "Image load timed out");
                Err(LoadError::Timeout {
                    secs: self.load_timeout.as_secs(),
                })
            }
        }
    }

    /// Compare two decoded images
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during the
    /// pixel pass.
    pub async fn compare_images(
        &self,
        before: RasterImage,
        after: RasterImage,
    ) -> Result<Comparison, CompareError> {
        let engine = self.engine.clone();

        let (output, before, after) = tokio::task::spawn_blocking(move || {
            let output = engine.compare(&before, &after);
            (output, before, after)
        })
        .await
        .map_err(|e| CompareError::Task(e.to_string()))?;
        let output = output?;

        let report = DiffReport::new(self.engine.comparison_mode(), &before, &after, &output);
        tracing::info!(
            mode = %report.mode,
            canvas = %report.canvas,
            changed = report.statistics.changed_pixel_count,
            percent = %report.statistics.changed_percent_text(),
            severity = %report.severity,
            "Comparison finished"
        );

        Ok(Comparison {
            canvas: output.canvas,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pixel_diff::{ComparisonMode, DiffError, Rgba};
    use std::collections::HashMap;

    /// In-memory loader keyed by locator
    #[derive(Default)]
    struct MapLoader {
        images: HashMap<String, RasterImage>,
    }

    impl MapLoader {
        fn with(mut self, locator: &str, image: RasterImage) -> Self {
            self.images.insert(locator.to_string(), image);
            self
        }
    }

    #[async_trait]
    impl ImageLoader for MapLoader {
        async fn load(&self, locator: &str) -> Result<RasterImage, LoadError> {
            self.images
                .get(locator)
                .cloned()
                .ok_or(LoadError::HttpStatus { status: 404 })
        }
    }

    /// Never finishes loading
    struct StalledLoader;

    #[async_trait]
    impl ImageLoader for StalledLoader {
        async fn load(&self, _locator: &str) -> Result<RasterImage, LoadError> {
            std::future::pending().await
        }
    }

    fn service(loader: impl ImageLoader + 'static, mode: ComparisonMode) -> ComparisonService {
        ComparisonService::new(
            Arc::new(loader),
            DiffEngine::new(mode),
            Duration::from_secs(5),
        )
    }

    fn solid(width: u32, height: u32, color: Rgba) -> RasterImage {
        RasterImage::filled(width, height, color).unwrap()
    }

    #[tokio::test]
    async fn test_compare_locators() {
        let loader = MapLoader::default()
            .with("old", solid(2, 2, Rgba::new(0, 0, 0, 255)))
            .with("new", solid(2, 2, Rgba::new(0, 0, 0, 255)));

        let comparison = service(loader, ComparisonMode::Binary)
            .compare_locators("old", "new")
            .await
            .unwrap();

        assert_eq!(comparison.report.statistics.changed_pixel_count, 0);
        assert_eq!(comparison.canvas.width(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_names_side() {
        let loader = MapLoader::default().with("old", solid(1, 1, Rgba::MAGENTA));

        let err = service(loader, ComparisonMode::Binary)
            .compare_locators("old", "missing")
            .await
            .unwrap_err();

        match err {
            CompareError::Load {
                side: Side::After,
                source: LoadError::HttpStatus { status: 404 },
            } => {}
            other => panic!("Expected after-side load error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_dimension_propagates() {
        let empty = RasterImage::new(0, 0, Vec::new()).unwrap();
        let err = service(MapLoader::default(), ComparisonMode::Heatmap)
            .compare_images(empty, solid(1, 1, Rgba::MAGENTA))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompareError::Diff(DiffError::InvalidDimensions { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_timeout() {
        let service = ComparisonService::new(
            Arc::new(StalledLoader),
            DiffEngine::default(),
            Duration::from_secs(10),
        );

        let err = service.compare_locators("a", "b").await.unwrap_err();
        match err {
            CompareError::Load {
                side: Side::Before,
                source: LoadError::Timeout { secs: 10 },
            } => {}
            other => panic!("Expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = AppConfig::from_yaml("mode: heatmap\nload_timeout_secs: 2\n").unwrap();
        let service = ComparisonService::from_config(Arc::new(MapLoader::default()), &config);
        assert_eq!(service.engine().comparison_mode(), ComparisonMode::Heatmap);
        assert_eq!(service.load_timeout, Duration::from_secs(2));
    }
}
