use std::io::Cursor;
use std::path::Path;

use tone_engine::RgbImage;

use crate::error::AppError;

/// A PNG decoded into packed 8-bit RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    /// Row-major `[r, g, b]` triples
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Borrow the pixels as an engine image.
    pub fn view(&self) -> Result<RgbImage<'_>, AppError> {
        Ok(RgbImage::new(&self.pixels, self.width, self.height)?)
    }
}

/// Decode PNG bytes to RGB.
///
/// Palette and low bit-depth images are expanded, 16-bit samples are
/// stripped to 8 bits, alpha is dropped and grayscale is replicated into
/// all three channels.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedImage(format!(
            "{:?} bit depth after expansion",
            frame.bit_depth
        )));
    }

    let pixels: Vec<u8> = match frame.color_type {
        png::ColorType::Rgb => buf,
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        other => {
            return Err(AppError::UnsupportedImage(format!(
                "{:?} color type",
                other
            )))
        }
    };

    tracing::debug!(
        width = frame.width,
        height = frame.height,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    Ok(DecodedImage {
        width: frame.width as usize,
        height: frame.height as usize,
        pixels,
    })
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<DecodedImage, AppError> {
    let bytes = std::fs::read(path)?;
    let image = decode_png(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Loaded image"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_decode_rgb() {
        let data = [10, 20, 30, 40, 50, 60];
        let image = decode_png(&encode(2, 1, png::ColorType::Rgb, &data)).unwrap();
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.pixels, data);
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let data = [10, 20, 30, 255, 40, 50, 60, 0];
        let image = decode_png(&encode(2, 1, png::ColorType::Rgba, &data)).unwrap();
        assert_eq!(image.pixels, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_decode_grayscale_replicates() {
        let image = decode_png(&encode(2, 1, png::ColorType::Grayscale, &[7, 200])).unwrap();
        assert_eq!(image.pixels, vec![7, 7, 7, 200, 200, 200]);
    }

    #[test]
    fn test_decode_gray_alpha() {
        let data = [90, 255, 180, 128];
        let image = decode_png(&encode(2, 1, png::ColorType::GrayscaleAlpha, &data)).unwrap();
        assert_eq!(image.pixels, vec![90, 90, 90, 180, 180, 180]);
    }

    #[test]
    fn test_view_matches_dimensions() {
        let data = vec![128u8; 4 * 3 * 3];
        let image = decode_png(&encode(4, 3, png::ColorType::Rgb, &data)).unwrap();
        let view = image.view().unwrap();
        assert_eq!((view.width(), view.height()), (4, 3));
        assert_eq!(view.pixel(3, 2).unwrap().to_bytes(), [128, 128, 128]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, AppError::ImageDecode(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_png(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
