//! LMS cone-response space
//!
//! Uses the Hunt-Pointer-Estevez matrix normalized to D65, so the D65
//! white maps to equal L, M and S responses. The inverse is computed from
//! the forward matrix rather than taken from a rounded published table.

use super::xyz::{mul3, Xyz};

/// XYZ to LMS, Hunt-Pointer-Estevez (D65-normalized).
pub const XYZ_TO_LMS: [[f32; 3]; 3] = [
    [0.4002, 0.7076, -0.0808],
    [-0.2263, 1.1653, 0.0457],
    [0.0, 0.0, 0.9182],
];

/// LMS to XYZ, inverse of [`XYZ_TO_LMS`].
pub const LMS_TO_XYZ: [[f32; 3]; 3] = [
    [1.8600666, -1.1294801, 0.2198983],
    [0.3612229, 0.6388043, -0.0000071],
    [0.0, 0.0, 1.0890873],
];

/// Long, medium and short cone responses, on the same scale as the XYZ input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    pub l: f32,
    pub m: f32,
    pub s: f32,
}

impl Lms {
    #[inline]
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Self { l, m, s }
    }
}

impl From<Xyz> for Lms {
    #[inline]
    fn from(c: Xyz) -> Self {
        xyz_to_lms(c)
    }
}

impl From<Lms> for Xyz {
    #[inline]
    fn from(c: Lms) -> Self {
        lms_to_xyz(c)
    }
}

pub fn xyz_to_lms(c: Xyz) -> Lms {
    let [l, m, s] = mul3(&XYZ_TO_LMS, c.to_array());
    Lms::new(l, m, s)
}

pub fn lms_to_xyz(c: Lms) -> Xyz {
    Xyz::from_array(mul3(&LMS_TO_XYZ, [c.l, c.m, c.s]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb_to_xyz, Rgb8, D65_WHITE};

    #[test]
    fn test_matrices_are_inverse_pair() {
        use nalgebra::Matrix3;

        let forward = Matrix3::from_fn(|r, c| XYZ_TO_LMS[r][c] as f64);
        let inverse = Matrix3::from_fn(|r, c| LMS_TO_XYZ[r][c] as f64);
        let product = forward * inverse;
        assert!(
            (product - Matrix3::identity()).abs().max() < 1e-5,
            "product deviates from identity: {product}"
        );
    }

    #[test]
    fn test_d65_white_is_balanced() {
        let lms = xyz_to_lms(D65_WHITE);
        assert!((lms.l - lms.m).abs() < 0.1, "{lms:?}");
        assert!((lms.m - lms.s).abs() < 0.1, "{lms:?}");
    }

    #[test]
    fn test_round_trip_and_non_negative_over_rgb_cube() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let xyz = rgb_to_xyz(Rgb8::new(r as u8, g as u8, b as u8));
                    let lms = xyz_to_lms(xyz);
                    assert!(
                        lms.l >= 0.0 && lms.m >= 0.0 && lms.s >= 0.0,
                        "negative cone response {lms:?} for {r},{g},{b}"
                    );

                    let back = lms_to_xyz(lms);
                    assert!((back.x - xyz.x).abs() < 0.01, "X for {r},{g},{b}");
                    assert!((back.y - xyz.y).abs() < 0.01, "Y for {r},{g},{b}");
                    assert!((back.z - xyz.z).abs() < 0.01, "Z for {r},{g},{b}");
                }
            }
        }
    }
}
