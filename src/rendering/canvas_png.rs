use std::io::Cursor;
use std::path::Path;

use pixel_diff::CanvasBuffer;

use crate::error::RenderError;

/// Encode a diff canvas as an 8-bit RGBA PNG.
///
/// Transparency is kept, so binary-mode canvases can be laid over the
/// original image by whatever displays them.
pub fn encode_canvas_png(canvas: &CanvasBuffer) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(canvas.pixels())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode a diff canvas and write it to `path`
pub fn write_canvas_png(canvas: &CanvasBuffer, path: &Path) -> Result<usize, RenderError> {
    let png_bytes = encode_canvas_png(canvas)?;
    std::fs::write(path, &png_bytes)?;
    tracing::info!(
        path = %path.display(),
        bytes = png_bytes.len(),
        width = canvas.width(),
        height = canvas.height(),
        "Wrote diff image"
    );
    Ok(png_bytes.len())
}
