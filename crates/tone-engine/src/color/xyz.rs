//! CIE 1931 XYZ tristimulus values and xy chromaticity
//!
//! XYZ here is scaled so the D65 reference white has Y = 100, which puts
//! sRGB white at approximately (95.047, 100, 108.883).

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb8;

/// Linear sRGB (D65) to XYZ, IEC 61966-2-1 primaries, unit scale.
///
/// Row sums give the D65 white point.
pub const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to linear sRGB (D65), the inverse of [`SRGB_TO_XYZ`].
pub const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Multiplier between unit-scale XYZ and the Y = 100 convention.
const XYZ_SCALE: f32 = 100.0;

/// D65 reference white, Y = 100 scale (CIE 15:2004).
pub const D65_WHITE: Xyz = Xyz::new(95.047, 100.0, 108.883);

/// Multiply a 3x3 row-major matrix by a column vector.
#[inline]
pub(crate) fn mul3(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// CIE XYZ tristimulus values (Y = 100 for reference white).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub(crate) fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<LinearRgb> for Xyz {
    fn from(c: LinearRgb) -> Self {
        let [x, y, z] = mul3(&SRGB_TO_XYZ, c.to_array());
        Self::new(x * XYZ_SCALE, y * XYZ_SCALE, z * XYZ_SCALE)
    }
}

impl From<Xyz> for LinearRgb {
    fn from(c: Xyz) -> Self {
        let unit = [c.x / XYZ_SCALE, c.y / XYZ_SCALE, c.z / XYZ_SCALE];
        let [r, g, b] = mul3(&XYZ_TO_SRGB, unit);
        LinearRgb::new(r, g, b)
    }
}

/// Device RGB to XYZ: gamma-decode, then apply [`SRGB_TO_XYZ`].
///
/// # Example
/// ```
/// use tone_engine::{rgb_to_xyz, Rgb8};
/// let white = rgb_to_xyz(Rgb8::WHITE);
/// assert!((white.x - 95.047).abs() < 0.01);
/// assert!((white.y - 100.0).abs() < 0.01);
/// assert!((white.z - 108.883).abs() < 0.01);
/// ```
#[inline]
pub fn rgb_to_xyz(c: Rgb8) -> Xyz {
    Xyz::from(LinearRgb::from(c))
}

/// XYZ to device RGB: apply [`XYZ_TO_SRGB`], then gamma-encode.
///
/// Out-of-gamut results are clamped per channel.
#[inline]
pub fn xyz_to_rgb(c: Xyz) -> Rgb8 {
    Rgb8::from(LinearRgb::from(c))
}

/// CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticity {
    pub x: f32,
    pub y: f32,
}

impl Chromaticity {
    /// D65 white point chromaticity.
    pub const D65: Chromaticity = Chromaticity::new(0.31271, 0.32902);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Project XYZ onto the xy plane.
///
/// A zero-sum (black) input yields `{0, 0}` rather than NaN.
pub fn xyz_to_chromaticity(c: Xyz) -> Chromaticity {
    let sum = c.x + c.y + c.z;
    if sum == 0.0 || !sum.is_finite() {
        return Chromaticity::default();
    }
    Chromaticity::new(c.x / sum, c.y / sum)
}

#[inline]
pub fn rgb_to_chromaticity(c: Rgb8) -> Chromaticity {
    xyz_to_chromaticity(rgb_to_xyz(c))
}
