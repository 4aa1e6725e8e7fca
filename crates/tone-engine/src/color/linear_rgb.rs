//! Linear RGB color type
//!
//! Linear RGB is proportional to light intensity. The XYZ matrices operate
//! on these values, never on gamma-encoded ones.

use super::rgb::Rgb8;
use super::transfer::{linear_to_srgb, srgb_to_linear};

/// A color in linear-light sRGB primaries.
///
/// Values are nominally 0.0..=1.0 but are not clamped, since matrix
/// round-trips of out-of-gamut XYZ legitimately leave that range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb8> for LinearRgb {
    /// Gamma-decode each channel through the exact 8-bit table.
    fn from(c: Rgb8) -> Self {
        Self {
            r: srgb_to_linear(c.r),
            g: srgb_to_linear(c.g),
            b: srgb_to_linear(c.b),
        }
    }
}

impl From<LinearRgb> for Rgb8 {
    /// Gamma-encode, round and clamp each channel.
    fn from(c: LinearRgb) -> Self {
        Rgb8::new(
            linear_to_srgb(c.r),
            linear_to_srgb(c.g),
            linear_to_srgb(c.b),
        )
    }
}
