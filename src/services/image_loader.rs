//! Image acquisition: source locator → decoded [`RasterImage`].
//!
//! Loading is split in two steps. A loader fetches raw bytes plus whatever
//! metadata its transport provides into a [`FetchedImage`];
//! [`FetchedImage::decode`] then checks status and content type and decodes
//! the pixels. Only PNG is decoded.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pixel_diff::RasterImage;

use crate::error::LoadError;

/// Resolves a source locator to a decoded image.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, locator: &str) -> Result<RasterImage, LoadError>;
}

/// Raw result of fetching an image, before decoding.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Response status for transports that have one (`None` for files)
    pub status: Option<u16>,
    /// Declared or sniffed MIME type
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FetchedImage {
    /// Check status and content type, then decode.
    pub fn decode(self) -> Result<RasterImage, LoadError> {
        if let Some(status) = self.status {
            if !(200..300).contains(&status) {
                return Err(LoadError::HttpStatus { status });
            }
        }

        let mime = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if !mime.starts_with("image/") {
            return Err(LoadError::NotAnImage {
                content_type: self.content_type,
            });
        }
        if mime != "image/png" {
            return Err(LoadError::Decode(format!("unsupported image format {mime}")));
        }

        decode_png(&self.bytes)
    }
}

/// Guess a MIME type from the leading bytes of a file.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"BM", "image/bmp"),
    ];

    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }
    SIGNATURES
        .iter()
        .find(|(magic, _)| bytes.starts_with(magic))
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

/// Decode a PNG into 8-bit RGBA.
///
/// Palette, grayscale and 16-bit images are normalized. Only the first
/// frame of an animated PNG is read.
pub fn decode_png(bytes: &[u8]) -> Result<RasterImage, LoadError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| LoadError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| LoadError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(LoadError::Decode("palette was not expanded".to_string()));
        }
    };

    into_raster(info.width, info.height, rgba)
}

/// Wrap decoded RGBA pixels, rejecting zero-sized results.
pub(crate) fn into_raster(width: u32, height: u32, rgba: Vec<u8>) -> Result<RasterImage, LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::ZeroDimension { width, height });
    }
    RasterImage::new(width, height, rgba).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Loads images from the local filesystem.
///
/// Relative locators are resolved against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    root: Option<PathBuf>,
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locators against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl ImageLoader for FileLoader {
    async fn load(&self, locator: &str) -> Result<RasterImage, LoadError> {
        let path = self.resolve(locator);
        tracing::debug!(path = %path.display(), "Reading image");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| LoadError::Transport {
                locator: locator.to_string(),
                source,
            })?;

        let fetched = FetchedImage {
            status: None,
            content_type: sniff_content_type(&bytes).to_string(),
            bytes,
        };
        let image = fetched.decode()?;

        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Decoded image"
        );
        Ok(image)
    }
}
