//! Color types and per-pixel color math
//!
//! - [`Rgba`]: one 8-bit RGBA sample as stored in image buffers.
//! - [`heat`]: the heat gradient, blending and dimming used by heatmap mode.

pub mod heat;
mod rgba;

pub use rgba::{Rgba, MAX_RGB_DISTANCE};
