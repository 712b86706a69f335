//! Test fixtures: colors and on-disk PNG images.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pixel_diff::Rgba;
use tempfile::TempDir;
use visidiff::services::FileLoader;

/// Colors used across scenarios
pub mod colors {
    use pixel_diff::Rgba;

    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
    pub const BLUE: Rgba = Rgba::new(0, 0, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const GRAY: Rgba = Rgba::new(128, 128, 128, 255);
}

/// Temporary directory of fixture images.
///
/// Files are removed when the value is dropped.
pub struct ImageDir {
    dir: TempDir,
}

impl ImageDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file in this directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Loader resolving relative locators inside this directory
    pub fn loader(&self) -> Arc<FileLoader> {
        Arc::new(FileLoader::with_root(self.dir.path()))
    }

    /// Write an RGBA PNG filled with one color
    pub fn solid(&self, name: &str, width: u32, height: u32, color: Rgba) -> PathBuf {
        let pixels = color.to_bytes().repeat((width * height) as usize);
        self.rgba(name, width, height, &pixels)
    }

    /// Write an RGBA PNG from raw row-major pixels
    pub fn rgba(&self, name: &str, width: u32, height: u32, pixels: &[u8]) -> PathBuf {
        self.write_png(name, width, height, png::ColorType::Rgba, pixels)
    }

    /// Write a single-channel grayscale PNG
    pub fn grayscale(&self, name: &str, width: u32, height: u32, levels: &[u8]) -> PathBuf {
        self.write_png(name, width, height, png::ColorType::Grayscale, levels)
    }

    /// Write arbitrary bytes (for non-image fixtures)
    pub fn raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: png::ColorType,
        data: &[u8],
    ) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, encode_png(width, height, color, data)).expect("Failed to write PNG");
        path
    }
}

impl Default for ImageDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode raw 8-bit samples as PNG bytes
pub fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf.into_inner()
}

/// Row-major pixels from a list of colors
pub fn pixels(colors: &[Rgba]) -> Vec<u8> {
    colors.iter().flat_map(|c| c.to_bytes()).collect()
}
