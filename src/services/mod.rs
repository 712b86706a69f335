pub mod comparison;
pub mod image_loader;

pub use comparison::{Comparison, ComparisonService};
pub use image_loader::{decode_png, sniff_content_type, FetchedImage, FileLoader, ImageLoader};
