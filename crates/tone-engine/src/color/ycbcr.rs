//! Full-range ITU-R BT.601 YCbCr (the JPEG/JFIF variant)
//!
//! Luma spans 0..=255 and both chroma channels are centered on 128.

use super::rgb::{float_to_byte, Rgb8};

/// Chroma offset for 8-bit full-range YCbCr.
pub const CHROMA_OFFSET: f32 = 128.0;

/// Luma plus blue- and red-difference chroma.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YCbCr {
    /// Luma, 0.0..=255.0
    pub y: f32,
    /// Blue-difference chroma, 0.0..=255.0 centered on 128
    pub cb: f32,
    /// Red-difference chroma, 0.0..=255.0 centered on 128
    pub cr: f32,
}

impl YCbCr {
    #[inline]
    pub const fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }
}

impl From<Rgb8> for YCbCr {
    #[inline]
    fn from(c: Rgb8) -> Self {
        rgb_to_ycbcr(c)
    }
}

impl From<YCbCr> for Rgb8 {
    #[inline]
    fn from(c: YCbCr) -> Self {
        ycbcr_to_rgb(c)
    }
}

pub fn rgb_to_ycbcr(c: Rgb8) -> YCbCr {
    let (r, g, b) = (c.r as f32, c.g as f32, c.b as f32);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = CHROMA_OFFSET - 0.168_736 * r - 0.331_264 * g + 0.5 * b;
    let cr = CHROMA_OFFSET + 0.5 * r - 0.418_688 * g - 0.081_312 * b;
    YCbCr::new(
        y.clamp(0.0, 255.0),
        cb.clamp(0.0, 255.0),
        cr.clamp(0.0, 255.0),
    )
}

/// Inverse transform; channels are rounded and clamped to 0..=255.
pub fn ycbcr_to_rgb(c: YCbCr) -> Rgb8 {
    let cb = c.cb - CHROMA_OFFSET;
    let cr = c.cr - CHROMA_OFFSET;
    let r = c.y + 1.402 * cr;
    let g = c.y - 0.344_136 * cb - 0.714_136 * cr;
    let b = c.y + 1.772 * cb;
    Rgb8::new(float_to_byte(r), float_to_byte(g), float_to_byte(b))
}
