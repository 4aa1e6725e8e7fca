//! Discrete Laplacian filter and the variance of its response.

use crate::image::GrayImage;

/// 4-neighbour discrete Laplacian.
///
/// ```text
///  0  1  0
///  1 -4  1
///  0  1  0
/// ```
pub const LAPLACIAN_KERNEL: [[i32; 3]; 3] = [[0, 1, 0], [1, -4, 1], [0, 1, 0]];

/// Convolve the image interior with [`LAPLACIAN_KERNEL`].
///
/// The output has one value per input pixel. The one-pixel border has no
/// full neighbourhood and is exactly 0.0. Images narrower or shorter than
/// 3 pixels are all border.
pub fn apply_laplacian_filter(image: &GrayImage<'_>) -> Vec<f32> {
    let (w, h) = (image.width(), image.height());
    let mut out = vec![0.0f32; w * h];
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut acc = 0i32;
            for (ky, row) in LAPLACIAN_KERNEL.iter().enumerate() {
                for (kx, &weight) in row.iter().enumerate() {
                    if weight != 0 {
                        acc += weight * image.at(x + kx - 1, y + ky - 1) as i32;
                    }
                }
            }
            out[y * w + x] = acc as f32;
        }
    }
    out
}

/// Population variance of the filter response over interior pixels only.
///
/// Border pixels are 0 by construction; counting them would drag the
/// variance toward zero and understate sharpness, most visibly on small
/// crops. Returns 0.0 when there is no interior (either side < 3) or when
/// `filtered` is shorter than `width * height`.
pub fn calculate_laplacian_variance(filtered: &[f32], width: usize, height: usize) -> f64 {
    if width < 3 || height < 3 {
        return 0.0;
    }
    match width.checked_mul(height) {
        Some(len) if filtered.len() >= len => {}
        _ => return 0.0,
    }

    let interior = || {
        (1..height - 1).flat_map(move |y| (1..width - 1).map(move |x| filtered[y * width + x]))
    };
    let count = ((width - 2) * (height - 2)) as f64;

    let mean = interior().map(f64::from).sum::<f64>() / count;
    interior()
        .map(|v| {
            let d = f64::from(v) - mean;
            d * d
        })
        .sum::<f64>()
        / count
}
