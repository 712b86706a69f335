//! Heat gradient and blending for heatmap mode.
//!
//! Colors here are kept as `[f32; 3]` RGB in the 0.0..=255.0 range until
//! the final write, so blending never rounds twice.

use super::Rgba;

/// Gradient start, `t = 0.0`.
pub const HEAT_GREEN: [f32; 3] = [0.0, 210.0, 90.0];
/// Gradient midpoint, `t = 0.5`.
pub const HEAT_AMBER: [f32; 3] = [255.0, 180.0, 0.0];
/// Gradient end, `t = 1.0`.
pub const HEAT_RED: [f32; 3] = [255.0, 20.0, 0.0];

/// Heat color for a boosted intensity `t`.
///
/// Two linear segments: green to amber for `t < 0.5`, amber to red for
/// `t >= 0.5`. `t` is clamped to `0.0..=1.0`.
///
/// # Example
/// ```
/// use pixel_diff::color::heat::{heat_color, HEAT_AMBER, HEAT_GREEN, HEAT_RED};
/// assert_eq!(heat_color(0.0), HEAT_GREEN);
/// assert_eq!(heat_color(0.5), HEAT_AMBER);
/// assert_eq!(heat_color(1.0), HEAT_RED);
/// ```
pub fn heat_color(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp(HEAT_GREEN, HEAT_AMBER, t * 2.0)
    } else {
        lerp(HEAT_AMBER, HEAT_RED, (t - 0.5) * 2.0)
    }
}

/// Mix `heat` over the RGB of `base` with weight `alpha`; result is opaque.
pub fn blend(base: Rgba, heat: [f32; 3], alpha: f32) -> Rgba {
    let alpha = alpha.clamp(0.0, 1.0);
    let keep = 1.0 - alpha;
    Rgba::new(
        to_channel(base.r as f32 * keep + heat[0] * alpha),
        to_channel(base.g as f32 * keep + heat[1] * alpha),
        to_channel(base.b as f32 * keep + heat[2] * alpha),
        255,
    )
}

/// Scale the RGB of `color` by `factor`; result is opaque.
pub fn dim(color: Rgba, factor: f32) -> Rgba {
    Rgba::new(
        to_channel(color.r as f32 * factor),
        to_channel(color.g as f32 * factor),
        to_channel(color.b as f32 * factor),
        255,
    )
}

#[inline]
fn lerp(from: [f32; 3], to: [f32; 3], s: f32) -> [f32; 3] {
    [
        from[0] + (to[0] - from[0]) * s,
        from[1] + (to[1] - from[1]) * s,
        from[2] + (to[2] - from[2]) * s,
    ]
}

#[inline]
fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
