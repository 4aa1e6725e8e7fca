//! Error type for pixel-buffer validation

use std::fmt;

/// Returned when a caller-supplied buffer or region does not describe a
/// valid image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Buffer length does not equal `width * height * channels`
    LengthMismatch {
        /// Bytes required by the declared dimensions
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// `width * height * channels` does not fit in `usize`
    DimensionsOverflow { width: usize, height: usize },
    /// Region has zero width or height
    EmptyRegion,
    /// Region extends past the image edge
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        image_width: usize,
        image_height: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, dimensions require {}",
                actual, expected
            ),
            ImageError::DimensionsOverflow { width, height } => {
                write!(f, "image dimensions {}x{} overflow", width, height)
            }
            ImageError::EmptyRegion => write!(f, "region has zero area"),
            ImageError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                image_width,
                image_height,
            } => write!(
                f,
                "region {}x{}+{}+{} exceeds {}x{} image",
                width, height, x, y, image_width, image_height
            ),
        }
    }
}

impl std::error::Error for ImageError {}
