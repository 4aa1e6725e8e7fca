//! RGB and grayscale buffer views with validated dimensions.

use super::error::ImageError;
use crate::color::Rgb8;

/// Bytes needed for `width * height * channels`, or an overflow error.
fn required_len(width: usize, height: usize, channels: usize) -> Result<usize, ImageError> {
    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(channels))
        .ok_or(ImageError::DimensionsOverflow { width, height })
}

/// A rectangular sub-area of an image, in pixels.
///
/// Regions usually come from an external landmark detector (cheek,
/// forehead, incisor crowns) and select the pixels that get averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    #[inline]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check the region is non-empty and lies inside a `width x height` image.
    pub fn validate(&self, image_width: usize, image_height: usize) -> Result<(), ImageError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::EmptyRegion);
        }
        let fits_x = self
            .x
            .checked_add(self.width)
            .is_some_and(|right| right <= image_width);
        let fits_y = self
            .y
            .checked_add(self.height)
            .is_some_and(|bottom| bottom <= image_height);
        if !fits_x || !fits_y {
            return Err(ImageError::RegionOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            });
        }
        Ok(())
    }
}

/// Interleaved 8-bit RGB pixels, row-major, borrowed from the caller.
///
/// # Example
///
/// ```
/// use tone_engine::{Rgb8, RgbImage};
///
/// let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
/// let image = RgbImage::new(&data, 2, 2).unwrap();
/// assert_eq!(image.pixel(1, 1), Some(Rgb8::WHITE));
///
/// assert!(RgbImage::new(&data, 3, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbImage<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbImage<'a> {
    /// Wrap `data`, which must hold exactly `width * height * 3` bytes.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, ImageError> {
        let expected = required_len(width, height, 3)?;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + 'a {
        self.data
            .chunks_exact(3)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
    }

    /// Pixels inside `region`, row-major.
    pub fn region_pixels(&self, region: Region) -> Result<Vec<Rgb8>, ImageError> {
        region.validate(self.width, self.height)?;
        let mut out = Vec::with_capacity(region.width * region.height);
        for y in region.y..region.y + region.height {
            let start = (y * self.width + region.x) * 3;
            let row = &self.data[start..start + region.width * 3];
            out.extend(row.chunks_exact(3).map(|p| Rgb8::new(p[0], p[1], p[2])));
        }
        Ok(out)
    }

    /// BT.601 luma of the pixels inside `region`, as a tightly packed plane
    /// of `region.width * region.height` bytes.
    pub fn region_luma(&self, region: Region) -> Result<Vec<u8>, ImageError> {
        Ok(self
            .region_pixels(region)?
            .into_iter()
            .map(Rgb8::luma)
            .collect())
    }
}

/// Single-channel 8-bit samples, row-major, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct GrayImage<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> GrayImage<'a> {
    /// Wrap `data`, which must hold exactly `width * height` bytes.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, ImageError> {
        let expected = required_len(width, height, 1)?;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(x, y)`. Caller guarantees bounds.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Convert an RGB view to a BT.601 luma plane of the same dimensions.
///
/// Achromatic pixels convert to their own channel value exactly.
pub fn rgb_to_grayscale(image: &RgbImage<'_>) -> Vec<u8> {
    image.pixels().map(Rgb8::luma).collect()
}
