//! Device RGB types
//!
//! [`Rgb8`] is what cameras and image files hand us: gamma-encoded sRGB,
//! one byte per channel. [`NormalizedRgb`] is the same encoding scaled to
//! 0.0..=1.0. Neither is linear light; see [`LinearRgb`](super::LinearRgb)
//! for arithmetic that must respect physics.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A device-encoded sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    /// Pure black, also the fallback for averaging nothing.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    /// Pure white, the D65 reference in sRGB.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// ITU-R BT.601 luma, rounded to the nearest integer.
    ///
    /// Computed in integer arithmetic so an achromatic color returns its
    /// own channel value exactly.
    ///
    /// # Example
    /// ```
    /// use tone_engine::Rgb8;
    /// assert_eq!(Rgb8::new(77, 77, 77).luma(), 77);
    /// ```
    #[inline]
    pub fn luma(self) -> u8 {
        let weighted = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        ((weighted + 500) / 1000) as u8
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive,
    /// surrounding whitespace ignored).
    ///
    /// ```
    /// use tone_engine::Rgb8;
    /// let ivory: Rgb8 = "#FFFFF0".parse().unwrap();
    /// assert_eq!(ivory, Rgb8::new(255, 255, 240));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength {
                len: s.chars().count(),
            });
        }

        // from_str_radix would accept a leading sign
        if let Some(digit) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            if matches!(s.len(), 3 | 6) {
                return Err(ParseColorError::InvalidDigit { digit });
            }
        }

        match s.len() {
            3 => {
                // 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            len => Err(ParseColorError::InvalidLength { len }),
        }
    }
}

/// Device RGB scaled to 0.0..=1.0 (still gamma-encoded).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl NormalizedRgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for NormalizedRgb {
    #[inline]
    fn from(c: Rgb8) -> Self {
        normalize_rgb(c)
    }
}

impl From<NormalizedRgb> for Rgb8 {
    #[inline]
    fn from(c: NormalizedRgb) -> Self {
        denormalize_rgb(c)
    }
}

/// Scale 0..=255 channels to 0.0..=1.0.
#[inline]
pub fn normalize_rgb(c: Rgb8) -> NormalizedRgb {
    NormalizedRgb::new(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0)
}

/// Scale 0.0..=1.0 channels back to 0..=255.
///
/// Each channel is clamped to 0.0..=1.0 before scaling, so nothing
/// outside the byte range leaks through. NaN maps to 0.
#[inline]
pub fn denormalize_rgb(c: NormalizedRgb) -> Rgb8 {
    Rgb8::new(unit_to_byte(c.r), unit_to_byte(c.g), unit_to_byte(c.b))
}

#[inline]
pub(crate) fn unit_to_byte(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Round and clamp an arbitrary float to a byte. NaN maps to 0.
#[inline]
pub(crate) fn float_to_byte(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Euclidean distance between two device colors in RGB byte space.
///
/// Zero iff the colors are identical; the largest possible value is the
/// black-white diagonal, `255 * sqrt(3)`.
pub fn color_difference(a: Rgb8, b: Rgb8) -> f32 {
    let dr = a.r as f32 - b.r as f32;
    let dg = a.g as f32 - b.g as f32;
    let db = a.b as f32 - b.b as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Componentwise mean of `colors`, rounded half-up to the nearest integer.
///
/// An empty slice averages to [`Rgb8::BLACK`].
pub fn average_rgb(colors: &[Rgb8]) -> Rgb8 {
    if colors.is_empty() {
        return Rgb8::BLACK;
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for c in colors {
        r += c.r as u64;
        g += c.g as u64;
        b += c.b as u64;
    }

    let n = colors.len() as u64;
    let mean = |sum: u64| ((sum * 2 + n) / (2 * n)) as u8;
    Rgb8::new(mean(r), mean(g), mean(b))
}
