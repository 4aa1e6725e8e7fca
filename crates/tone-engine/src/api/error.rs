//! Unified error type for the tone-engine public API.
//!
//! The analysis functions themselves are total; [`EngineError`] only covers
//! building validated inputs (image views, regions, custom guides, hex
//! colors) from caller data.

use crate::color::ParseColorError;
use crate::image::ImageError;
use crate::shade::GuideError;
use std::fmt;

/// Wraps every construction error of the crate for `?` propagation.
///
/// # Example
///
/// ```
/// use tone_engine::{EngineError, Rgb8, RgbImage, ToneAnalyzer};
///
/// fn analyze(data: &[u8], w: usize, h: usize, hex: &str) -> Result<u8, EngineError> {
///     let _reference: Rgb8 = hex.parse()?;
///     let image = RgbImage::new(data, w, h)?;
///     Ok(ToneAnalyzer::new().analyze(&image)?.sharpness.score)
/// }
///
/// assert!(analyze(&[0; 12], 2, 2, "#fff").is_ok());
/// assert!(analyze(&[0; 5], 2, 2, "#fff").is_err());
/// assert!(analyze(&[0; 12], 2, 2, "#ffff").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Invalid pixel buffer or region
    Image(ImageError),
    /// Invalid hex color string
    ParseColor(ParseColorError),
    /// Invalid custom shade guide
    Guide(GuideError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Image(err) => write!(f, "image error: {}", err),
            EngineError::ParseColor(err) => write!(f, "color parse error: {}", err),
            EngineError::Guide(err) => write!(f, "shade guide error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Image(err) => Some(err),
            EngineError::ParseColor(err) => Some(err),
            EngineError::Guide(err) => Some(err),
        }
    }
}

impl From<ImageError> for EngineError {
    fn from(err: ImageError) -> Self {
        EngineError::Image(err)
    }
}

impl From<ParseColorError> for EngineError {
    fn from(err: ParseColorError) -> Self {
        EngineError::ParseColor(err)
    }
}

impl From<GuideError> for EngineError {
    fn from(err: GuideError) -> Self {
        EngineError::Guide(err)
    }
}
