//! Top-level focus analysis entry points.

use super::laplacian::{apply_laplacian_filter, calculate_laplacian_variance};
use super::score::{normalize_sharpness_score, sharpness_feedback, sharpness_verdict, SharpnessVerdict};
use crate::image::{rgb_to_grayscale, GrayImage, RgbImage};

/// Outcome of a focus analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SharpnessResult {
    /// Calibrated score, 0..=100
    pub score: u8,
    /// Variance of the Laplacian response over interior pixels
    pub laplacian_variance: f64,
    pub verdict: SharpnessVerdict,
    /// Fixed message for `verdict`
    pub feedback: &'static str,
}

impl SharpnessResult {
    /// Build the result for an already computed variance.
    pub fn from_variance(laplacian_variance: f64) -> Self {
        let verdict = sharpness_verdict(laplacian_variance);
        Self {
            score: normalize_sharpness_score(laplacian_variance),
            laplacian_variance,
            verdict,
            feedback: sharpness_feedback(verdict),
        }
    }
}

/// Analyse focus of a grayscale image.
///
/// A uniform or too-small image is not an error: it has zero variance and
/// comes back `Rejected` with score 0.
///
/// # Example
///
/// ```
/// use tone_engine::{analyze_sharpness_from_gray, GrayImage, SharpnessVerdict};
///
/// let flat = vec![128u8; 20 * 20];
/// let result = analyze_sharpness_from_gray(&GrayImage::new(&flat, 20, 20).unwrap());
/// assert_eq!(result.laplacian_variance, 0.0);
/// assert_eq!(result.verdict, SharpnessVerdict::Rejected);
/// ```
pub fn analyze_sharpness_from_gray(image: &GrayImage<'_>) -> SharpnessResult {
    let filtered = apply_laplacian_filter(image);
    let variance = calculate_laplacian_variance(&filtered, image.width(), image.height());
    SharpnessResult::from_variance(variance)
}

/// Analyse focus of an RGB image via its BT.601 luma plane.
///
/// For an achromatic image this is identical to
/// [`analyze_sharpness_from_gray`] on the matching gray buffer.
pub fn analyze_sharpness(image: &RgbImage<'_>) -> SharpnessResult {
    let gray = rgb_to_grayscale(image);
    // Same dimensions as a validated RgbImage, so the length always matches
    let view = match GrayImage::new(&gray, image.width(), image.height()) {
        Ok(view) => view,
        Err(_) => return SharpnessResult::from_variance(0.0),
    };
    analyze_sharpness_from_gray(&view)
}
