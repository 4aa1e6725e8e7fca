//! Correlated color temperature estimation
//!
//! McCamy's cubic (1992) maps xy chromaticity to a CCT in Kelvin. It is
//! accurate to a few Kelvin near the Planckian locus between roughly 2856K
//! and 6500K, and degrades gracefully outside; results are clamped to
//! [`CCT_MIN_KELVIN`]..=[`CCT_MAX_KELVIN`].

use super::rgb::Rgb8;
use super::xyz::{rgb_to_chromaticity, Chromaticity};

/// Lower clamp for estimated CCT.
pub const CCT_MIN_KELVIN: f32 = 1000.0;
/// Upper clamp for estimated CCT.
pub const CCT_MAX_KELVIN: f32 = 25000.0;

/// McCamy epicenter.
const EPICENTER_X: f32 = 0.3320;
const EPICENTER_Y: f32 = 0.1858;

/// Estimate the correlated color temperature of a chromaticity.
///
/// Degenerate inputs (chromaticity on the epicenter line, NaN) return the
/// nearest clamp bound instead of propagating infinities.
///
/// # Example
/// ```
/// use tone_engine::{estimate_cct, Chromaticity};
/// let k = estimate_cct(Chromaticity::D65);
/// assert!((k - 6504.0).abs() < 150.0);
/// ```
pub fn estimate_cct(xy: Chromaticity) -> f32 {
    let n = (xy.x - EPICENTER_X) / (EPICENTER_Y - xy.y);
    if n.is_nan() {
        return CCT_MIN_KELVIN;
    }
    if n.is_infinite() {
        return if n > 0.0 { CCT_MAX_KELVIN } else { CCT_MIN_KELVIN };
    }

    let cct = 449.0 * n.powi(3) + 3525.0 * n.powi(2) + 6823.3 * n + 5520.33;
    if cct.is_nan() {
        return CCT_MIN_KELVIN;
    }
    cct.clamp(CCT_MIN_KELVIN, CCT_MAX_KELVIN)
}

/// Chromaticity of a device color, then [`estimate_cct`].
#[inline]
pub fn estimate_cct_from_rgb(c: Rgb8) -> f32 {
    estimate_cct(rgb_to_chromaticity(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_anchor() {
        let k = estimate_cct(Chromaticity::D65);
        assert!((k - 6500.0).abs() <= 150.0, "D65 estimated at {k}K");

        let k = estimate_cct_from_rgb(Rgb8::WHITE);
        assert!((k - 6500.0).abs() <= 150.0, "sRGB white estimated at {k}K");
    }

    #[test]
    fn test_illuminant_a() {
        // CIE illuminant A, nominally 2856K
        let k = estimate_cct(Chromaticity::new(0.44757, 0.40745));
        assert!((k - 2856.0).abs() < 20.0, "illuminant A estimated at {k}K");
    }

    #[test]
    fn test_warm_is_lower_than_cool() {
        let warm = estimate_cct_from_rgb(Rgb8::new(255, 180, 120));
        let cool = estimate_cct_from_rgb(Rgb8::new(180, 200, 255));
        assert!(warm < cool, "warm {warm}K should be below cool {cool}K");
    }

    #[test]
    fn test_output_always_clamped() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let k = estimate_cct_from_rgb(Rgb8::new(r as u8, g as u8, b as u8));
                    assert!(
                        (CCT_MIN_KELVIN..=CCT_MAX_KELVIN).contains(&k),
                        "CCT {k} out of range for {r},{g},{b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        // On the epicenter's y: division by zero
        let k = estimate_cct(Chromaticity::new(0.4, EPICENTER_Y));
        assert!((CCT_MIN_KELVIN..=CCT_MAX_KELVIN).contains(&k));
        assert_eq!(estimate_cct(Chromaticity::new(f32::NAN, 0.3)), CCT_MIN_KELVIN);
        assert_eq!(
            estimate_cct(Chromaticity::new(EPICENTER_X, EPICENTER_Y)),
            CCT_MIN_KELVIN
        );
    }
}
