//! ToneAnalyzer builder -- the primary entry point for the crate.
//!
//! [`ToneAnalyzer`] runs the whole pipeline on one photo: focus check,
//! color features of the averaged region, and (when focus is good enough)
//! the shade match with its interpretations.

use std::borrow::Cow;

use crate::color::{
    average_rgb, estimate_cct, rgb_to_xyz, rgb_to_ycbcr, xyz_to_chromaticity, xyz_to_lms,
    Chromaticity, Lab, Lms, Rgb8, Xyz, YCbCr,
};
use crate::image::{GrayImage, Region, RgbImage};
use crate::shade::{
    interpret_undertone, interpret_yellowness, BrightnessInterpretation, ShadeGuide, ShadeMatch,
    UndertoneReading, YellownessInterpretation,
};
use crate::sharpness::{
    analyze_sharpness, analyze_sharpness_from_gray, SharpnessResult, SharpnessVerdict,
};

use super::error::EngineError;

/// Shade match plus its qualitative readings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeReading {
    pub shade_match: ShadeMatch,
    /// Brightness band of the matched shade
    pub brightness: BrightnessInterpretation,
    /// Yellowness of the measurement itself
    pub yellowness: YellownessInterpretation,
    pub undertone: UndertoneReading,
}

/// Everything [`ToneAnalyzer::analyze`] measures on one image.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneReport {
    pub sharpness: SharpnessResult,
    /// Whether the sharpness verdict reached the configured minimum
    pub quality_passed: bool,
    /// Mean device color of the analysed pixels
    pub average_rgb: Rgb8,
    pub xyz: Xyz,
    pub lab: Lab,
    pub lms: Lms,
    pub chromaticity: Chromaticity,
    pub cct_kelvin: f32,
    pub ycbcr: YCbCr,
    /// Only present when `quality_passed`
    pub shade: Option<ShadeReading>,
}

/// High-level analysis builder.
///
/// # Design
///
/// - Defaults: whole image, built-in VITA guide, bleached shades included,
///   minimum verdict `Acceptable`
/// - Configuration methods consume and return `self`
/// - [`analyze()`](Self::analyze) takes `&self`, so one analyzer serves
///   many images and threads
///
/// # Example
///
/// ```
/// use tone_engine::{Region, RgbImage, SharpnessVerdict, ToneAnalyzer};
///
/// // 8x8 of a uniform enamel-like color: perfectly flat, so rejected
/// let data: Vec<u8> = [236u8, 228, 206].repeat(64);
/// let image = RgbImage::new(&data, 8, 8).unwrap();
///
/// let report = ToneAnalyzer::new()
///     .region(Region::new(2, 2, 4, 4))
///     .exclude_bleached(true)
///     .analyze(&image)
///     .unwrap();
///
/// assert_eq!(report.sharpness.verdict, SharpnessVerdict::Rejected);
/// assert!(!report.quality_passed);
/// assert!(report.shade.is_none());
/// assert_eq!(report.average_rgb.to_bytes(), [236, 228, 206]);
/// ```
#[derive(Debug, Clone)]
pub struct ToneAnalyzer {
    guide: Cow<'static, ShadeGuide>,
    region: Option<Region>,
    exclude_bleached: bool,
    minimum_verdict: SharpnessVerdict,
}

impl Default for ToneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneAnalyzer {
    pub fn new() -> Self {
        Self {
            guide: Cow::Borrowed(ShadeGuide::vita()),
            region: None,
            exclude_bleached: false,
            minimum_verdict: SharpnessVerdict::Acceptable,
        }
    }

    /// Restrict analysis to one region (e.g. the incisor crowns).
    #[inline]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Skip the bleached group when matching.
    #[inline]
    pub fn exclude_bleached(mut self, exclude: bool) -> Self {
        self.exclude_bleached = exclude;
        self
    }

    /// Lowest verdict that still allows shade interpretation.
    #[inline]
    pub fn minimum_verdict(mut self, verdict: SharpnessVerdict) -> Self {
        self.minimum_verdict = verdict;
        self
    }

    /// Match against a custom guide instead of VITA.
    #[inline]
    pub fn guide(mut self, guide: ShadeGuide) -> Self {
        self.guide = Cow::Owned(guide);
        self
    }

    /// The guide matches are made against.
    #[inline]
    pub fn shade_guide(&self) -> &ShadeGuide {
        &self.guide
    }

    /// Match a measured Lab color and interpret it, skipping the quality gate.
    pub fn interpret(&self, lab: Lab) -> ShadeReading {
        let shade_match = self.guide.find_best_match(lab, self.exclude_bleached);
        let brightness = self.guide.interpret_brightness(&shade_match.id);
        ShadeReading {
            brightness,
            yellowness: interpret_yellowness(lab),
            undertone: interpret_undertone(lab),
            shade_match,
        }
    }

    /// Run the full pipeline on `image`.
    ///
    /// 1. Sharpness of the region (or whole image) via its luma plane
    /// 2. Mean color of the same pixels and its color-space features
    /// 3. Shade match and interpretation, only if the verdict reaches the
    ///    configured minimum
    ///
    /// # Errors
    ///
    /// [`EngineError::Image`] if the configured region is empty or does not
    /// fit inside the image. A blurry or uniform image is not an error.
    pub fn analyze(&self, image: &RgbImage<'_>) -> Result<ToneReport, EngineError> {
        let (sharpness, average) = match self.region {
            Some(region) => {
                let luma = image.region_luma(region)?;
                let gray = GrayImage::new(&luma, region.width, region.height)?;
                let pixels = image.region_pixels(region)?;
                (analyze_sharpness_from_gray(&gray), average_rgb(&pixels))
            }
            None => {
                let pixels: Vec<Rgb8> = image.pixels().collect();
                (analyze_sharpness(image), average_rgb(&pixels))
            }
        };

        let xyz = rgb_to_xyz(average);
        let lab = Lab::from(xyz);
        let chromaticity = xyz_to_chromaticity(xyz);
        let quality_passed = sharpness.verdict >= self.minimum_verdict;

        Ok(ToneReport {
            quality_passed,
            average_rgb: average,
            xyz,
            lab,
            lms: xyz_to_lms(xyz),
            chromaticity,
            cct_kelvin: estimate_cct(chromaticity),
            ycbcr: rgb_to_ycbcr(average),
            shade: quality_passed.then(|| self.interpret(lab)),
            sharpness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_lab;
    use crate::shade::{BrightnessLevel, ShadeReference};

    /// Checkerboard of two colors with 1-pixel cells.
    fn checker(w: usize, h: usize, a: Rgb8, b: Rgb8) -> Vec<u8> {
        (0..w * h)
            .flat_map(|i| {
                let (x, y) = (i % w, i / w);
                if (x + y) % 2 == 0 {
                    a.to_bytes()
                } else {
                    b.to_bytes()
                }
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let analyzer = ToneAnalyzer::new();
        assert!(std::ptr::eq(analyzer.shade_guide(), ShadeGuide::vita()));
        assert_eq!(analyzer.minimum_verdict, SharpnessVerdict::Acceptable);
        assert!(!analyzer.exclude_bleached);
        assert!(analyzer.region.is_none());
    }

    #[test]
    fn test_sharp_image_gets_shade() {
        let data = checker(16, 16, Rgb8::new(250, 245, 230), Rgb8::new(150, 140, 110));
        let image = RgbImage::new(&data, 16, 16).unwrap();
        let report = ToneAnalyzer::new().analyze(&image).unwrap();

        assert_eq!(report.sharpness.verdict, SharpnessVerdict::Optimal);
        assert!(report.quality_passed);
        let shade = report.shade.expect("shade reading when quality passes");
        assert_eq!(shade.shade_match.alternative_matches.len(), 3);
        assert_eq!(report.lab, rgb_to_lab(report.average_rgb));
        assert_eq!(report.xyz, rgb_to_xyz(report.average_rgb));
    }

    #[test]
    fn test_flat_image_skips_shade() {
        let data = [200u8, 190, 160].repeat(100);
        let image = RgbImage::new(&data, 10, 10).unwrap();
        let report = ToneAnalyzer::new().analyze(&image).unwrap();
        assert_eq!(report.sharpness.score, 0);
        assert!(!report.quality_passed);
        assert!(report.shade.is_none());
        assert_eq!(report.average_rgb, Rgb8::new(200, 190, 160));
    }

    #[test]
    fn test_minimum_verdict_rejected_always_passes() {
        let data = [200u8, 190, 160].repeat(100);
        let image = RgbImage::new(&data, 10, 10).unwrap();
        let report = ToneAnalyzer::new()
            .minimum_verdict(SharpnessVerdict::Rejected)
            .analyze(&image)
            .unwrap();
        assert!(report.quality_passed);
        assert!(report.shade.is_some());
    }

    #[test]
    fn test_region_limits_pixels() {
        // Left half white, right half black; region covers only the left half
        let (w, h) = (8, 4);
        let data: Vec<u8> = (0..w * h)
            .flat_map(|i| if i % w < 4 { [255u8; 3] } else { [0u8; 3] })
            .collect();
        let image = RgbImage::new(&data, w, h).unwrap();

        let report = ToneAnalyzer::new()
            .region(Region::new(0, 0, 4, 4))
            .analyze(&image)
            .unwrap();
        assert_eq!(report.average_rgb, Rgb8::WHITE);
        assert_eq!(report.sharpness.laplacian_variance, 0.0);

        let full = ToneAnalyzer::new().analyze(&image).unwrap();
        assert_eq!(full.average_rgb, Rgb8::new(128, 128, 128));
        assert!(full.sharpness.laplacian_variance > 0.0);
    }

    #[test]
    fn test_bad_region_is_an_error() {
        let data = [0u8; 4 * 4 * 3];
        let image = RgbImage::new(&data, 4, 4).unwrap();
        let err = ToneAnalyzer::new()
            .region(Region::new(2, 2, 4, 4))
            .analyze(&image)
            .unwrap_err();
        assert!(matches!(err, EngineError::Image(_)));
    }

    #[test]
    fn test_interpret_with_custom_guide() {
        let guide = ShadeGuide::new(vec![
            ShadeReference::new("light", "s", Lab::new(75.0, 0.0, 10.0), 1),
            ShadeReference::new("dark", "s", Lab::new(55.0, 0.0, 10.0), 2),
        ])
        .unwrap();
        let analyzer = ToneAnalyzer::new().guide(guide);
        let reading = analyzer.interpret(Lab::new(74.0, 0.0, 10.0));
        assert_eq!(reading.shade_match.id, "light");
        assert_eq!(reading.brightness.level, BrightnessLevel::VeryBright);
        assert_eq!(reading.shade_match.alternative_matches.len(), 1);
    }

    #[test]
    fn test_analyzer_is_reusable() {
        let data = checker(12, 12, Rgb8::new(240, 230, 200), Rgb8::new(90, 80, 60));
        let image = RgbImage::new(&data, 12, 12).unwrap();
        let analyzer = ToneAnalyzer::new().exclude_bleached(true);
        assert_eq!(
            analyzer.analyze(&image).unwrap(),
            analyzer.analyze(&image).unwrap()
        );
    }
}
