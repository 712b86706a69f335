use std::fmt;

use pixel_diff::DiffError;
use serde::Serialize;
use thiserror::Error;

/// Which of the two compared images an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => f.write_str("before"),
            Side::After => f.write_str("after"),
        }
    }
}

/// Failure to turn a source locator into a decoded image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Transport error for {locator}: {source}")]
    Transport {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Not an image: content type {content_type:?}")]
    NotAnImage { content_type: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Image has zero dimension: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Image load timed out ({secs}s)")]
    Timeout { secs: u64 },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure anywhere in the load → compare pipeline.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Failed to load {side} image: {source}")]
    Load {
        side: Side,
        #[source]
        source: LoadError,
    },

    #[error("Comparison failed: {0}")]
    Diff(#[from] DiffError),

    #[error("Comparison task failed: {0}")]
    Task(String),
}

impl CompareError {
    pub fn load(side: Side, source: LoadError) -> Self {
        CompareError::Load { side, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_transport() {
        let error = LoadError::Transport {
            locator: "a.png".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Transport error for a.png: missing");
    }

    #[test]
    fn test_load_error_http_status() {
        let error = LoadError::HttpStatus { status: 404 };
        assert_eq!(error.to_string(), "HTTP 404");
    }

    #[test]
    fn test_load_error_not_an_image() {
        let error = LoadError::NotAnImage {
            content_type: "text/html".to_string(),
        };
        assert_eq!(error.to_string(), "Not an image: content type \"text/html\"");
    }

    #[test]
    fn test_load_error_zero_dimension() {
        let error = LoadError::ZeroDimension {
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "Image has zero dimension: 0x12");
    }

    #[test]
    fn test_load_error_timeout() {
        let error = LoadError::Timeout { secs: 10 };
        assert_eq!(error.to_string(), "Image load timed out (10s)");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_compare_error_names_side() {
        let error = CompareError::load(Side::After, LoadError::Decode("bad".to_string()));
        assert_eq!(
            error.to_string(),
            "Failed to load after image: Decode error: bad"
        );
    }

    #[test]
    fn test_compare_error_from_diff_error() {
        let diff = DiffError::InvalidDimensions {
            before: (0, 0),
            after: (1, 1),
        };
        let error: CompareError = diff.into();
        match error {
            CompareError::Diff(_) => {}
            _ => panic!("Expected Diff variant"),
        }
    }
}
