//! Color hints for signals and shell surfaces.
//!
//! Signal colors are derived from a hue through HSV, which keeps the four
//! colors at full saturation and value. All functions return `palette::Srgb`
//! (0.0-1.0 range); shells convert to their native format.

use palette::{FromColor, Hsv, Srgb};

/// Color a shell restores when a signal is hidden.
pub const BACKGROUND: Srgb = Srgb::new(1.0, 1.0, 1.0);

/// All channels off, for LED shells.
pub const OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}
