//! Tonemapping and gamma for the demo shaders

use softraster::Color;

pub const SRGB_GAMMA: f32 = 2.2;

/// Narkowicz's fit of the ACES filmic curve
fn aces(x: f32) -> f32 {
    let mapped = (x * (2.51 * x + 0.03)) / (x * (2.43 * x + 0.59) + 0.14);

    mapped.max(0.0).min(1.0)
}

/// Applies `f` to the red, green and blue channels, keeping alpha
fn map_rgb<F>(color: Color, f: F) -> Color where F: Fn(f32) -> f32 {
    Color::new(f(color.x), f(color.y), f(color.z), color.w)
}

/// Maps HDR radiance into `[0, 1]`
pub fn tonemap(color: Color) -> Color {
    map_rgb(color, aces)
}

pub fn to_srgb(color: Color) -> Color {
    map_rgb(color, |c| c.powf(1.0 / SRGB_GAMMA))
}

pub fn to_linear(color: Color) -> Color {
    map_rgb(color, |c| c.powf(SRGB_GAMMA))
}
