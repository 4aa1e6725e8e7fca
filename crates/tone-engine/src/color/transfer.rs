//! sRGB transfer function (IEC 61966-2-1)
//!
//! Decoding uses a 256-entry table generated by build.rs, so every 8-bit
//! device value maps to exactly the value the formula gives. Encoding
//! evaluates the inverse formula directly.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/srgb8_lut.rs"));

/// Below this encoded value the transfer curve is linear.
pub const SRGB_DECODE_THRESHOLD: f32 = 0.04045;

/// Below this linear value the inverse curve is linear.
pub const SRGB_ENCODE_THRESHOLD: f32 = 0.0031308;

/// Convert an 8-bit sRGB channel to linear light in 0.0..=1.0.
///
/// # Example
/// ```
/// use tone_engine::color::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert_eq!(srgb_to_linear(255), 1.0);
/// ```
#[inline]
pub fn srgb_to_linear(channel: u8) -> f32 {
    SRGB8_TO_LINEAR[channel as usize]
}

/// Decode a normalized sRGB value (0.0..=1.0) to linear light.
///
/// Input is clamped first; NaN decodes to 0.0.
#[inline]
pub fn decode_srgb(value: f32) -> f32 {
    let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    if v <= SRGB_DECODE_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light to a normalized sRGB value in 0.0..=1.0.
///
/// Input is clamped first; NaN encodes to 0.0.
#[inline]
pub fn encode_srgb(linear: f32) -> f32 {
    let v = if linear.is_nan() { 0.0 } else { linear.clamp(0.0, 1.0) };
    if v <= SRGB_ENCODE_THRESHOLD {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert linear light to an 8-bit sRGB channel, rounded and clamped.
///
/// # Example
/// ```
/// use tone_engine::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.5), 188);
/// assert_eq!(linear_to_srgb(2.0), 255);
/// ```
#[inline]
pub fn linear_to_srgb(linear: f32) -> u8 {
    (encode_srgb(linear) * 255.0).round().clamp(0.0, 255.0) as u8
}
