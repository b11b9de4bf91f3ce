//! Color helpers for the point where shading meets the framebuffer.

use prism_core::Color;

pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;

/// Saturate every channel into [0, 1]. NaN channels become 0.
#[inline]
pub fn clip(color: Color) -> Color {
    Color::new(
        saturate(color.x),
        saturate(color.y),
        saturate(color.z),
    )
}

#[inline]
fn saturate(c: f32) -> f32 {
    // f32::max discards NaN
    c.max(0.0).min(1.0)
}

/// Quantize a color to 8-bit channels, clipping first.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let c = clip(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}
