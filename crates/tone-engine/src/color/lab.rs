//! CIE 1976 L*a*b* relative to D65
//!
//! Shade references are stored in Lab, and measured colors reach the
//! matcher through `Rgb8 -> Xyz -> Lab`.

use super::rgb::Rgb8;
use super::xyz::{rgb_to_xyz, xyz_to_rgb, Xyz, D65_WHITE};

/// CIE ε = (6/29)^3
const EPSILON: f32 = 216.0 / 24389.0;
/// CIE κ = (29/3)^3
const KAPPA: f32 = 24389.0 / 27.0;

/// A CIELAB color.
///
/// - `l`: lightness, 0 (black) to 100 (diffuse white)
/// - `a`: green (-) to red (+)
/// - `b`: blue (-) to yellow (+)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance, for comparisons that skip the sqrt.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// CIE76 color difference (Euclidean distance in Lab).
    ///
    /// # Example
    /// ```
    /// use tone_engine::Lab;
    /// let a = Lab::new(70.0, 0.0, 12.0);
    /// let b = Lab::new(73.0, 4.0, 12.0);
    /// assert_eq!(a.delta_e(b), 5.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// True if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f32) -> f32 {
    let cube = f * f * f;
    if cube > EPSILON {
        cube
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl From<Xyz> for Lab {
    fn from(c: Xyz) -> Self {
        let fx = lab_f(c.x / D65_WHITE.x);
        let fy = lab_f(c.y / D65_WHITE.y);
        let fz = lab_f(c.z / D65_WHITE.z);
        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl From<Lab> for Xyz {
    fn from(c: Lab) -> Self {
        let fy = (c.l + 16.0) / 116.0;
        let fx = fy + c.a / 500.0;
        let fz = fy - c.b / 200.0;
        Xyz::new(
            lab_f_inv(fx) * D65_WHITE.x,
            lab_f_inv(fy) * D65_WHITE.y,
            lab_f_inv(fz) * D65_WHITE.z,
        )
    }
}

/// Device RGB to CIELAB (D65).
#[inline]
pub fn rgb_to_lab(c: Rgb8) -> Lab {
    Lab::from(rgb_to_xyz(c))
}

/// CIELAB (D65) to device RGB, clamped to the sRGB gamut per channel.
#[inline]
pub fn lab_to_rgb(c: Lab) -> Rgb8 {
    xyz_to_rgb(Xyz::from(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white = rgb_to_lab(Rgb8::WHITE);
        assert!((white.l - 100.0).abs() < 0.01);
        assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01, "{white:?}");

        let black = rgb_to_lab(Rgb8::BLACK);
        assert!(black.l.abs() < 1e-4);
    }

    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb};

        let samples = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (230, 205, 170),
            (20, 30, 40),
        ];
        for (r, g, b) in samples {
            let ours = rgb_to_lab(Rgb8::new(r, g, b));
            let theirs: PaletteLab = Srgb::new(r, g, b).into_format::<f32>().into_color();
            assert!((ours.l - theirs.l).abs() < 0.05, "L for {r},{g},{b}");
            assert!((ours.a - theirs.a).abs() < 0.1, "a for {r},{g},{b}");
            assert!((ours.b - theirs.b).abs() < 0.1, "b for {r},{g},{b}");
        }
    }

    #[test]
    fn test_rgb_lab_round_trip() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let c = Rgb8::new(r as u8, g as u8, b as u8);
                    let back = lab_to_rgb(rgb_to_lab(c));
                    for (orig, got) in c.to_bytes().iter().zip(back.to_bytes()) {
                        assert!(
                            (*orig as i32 - got as i32).abs() <= 1,
                            "{c:?} round-tripped to {back:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_delta_e_properties() {
        let a = Lab::new(71.0, 1.5, 15.0);
        let b = Lab::new(67.0, 2.2, 18.0);
        assert_eq!(a.delta_e(a), 0.0);
        assert_eq!(a.delta_e(b), b.delta_e(a));
        assert!(a.delta_e(b) > 0.0);
    }

    #[test]
    fn test_chroma() {
        assert_eq!(Lab::new(50.0, 3.0, 4.0).chroma(), 5.0);
        assert_eq!(Lab::new(50.0, 0.0, 0.0).chroma(), 0.0);
    }
}
