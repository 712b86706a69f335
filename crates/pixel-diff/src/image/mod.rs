//! Decoded input images.

mod raster;

pub use raster::RasterImage;
