//! Test fixtures: synthetic photos and config files on disk.

use std::path::PathBuf;

use tempfile::TempDir;

/// Enamel-like colors with a strong luma difference
pub mod colors {
    pub const LIGHT: [u8; 3] = [246, 238, 218];
    pub const DARK: [u8; 3] = [170, 158, 128];
    /// Per-channel mean of `LIGHT` and `DARK`
    pub const MEAN: [u8; 3] = [208, 198, 173];
    pub const FLAT: [u8; 3] = [200, 190, 160];
}

/// Config with a small custom guide called "seasons"
pub const SEASONS_CONFIG: &str = r#"
quality:
  minimum_verdict: acceptable
matching:
  guide: vita
guides:
  seasons:
    - id: spring
      series: warm
      lab: [72.0, 8.0, 22.0]
      rank: 1
    - id: winter
      series: cool
      lab: [48.0, 6.0, -4.0]
      rank: 2
"#;

/// 1-pixel checkerboard, light on even squares
pub fn checkerboard(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .flat_map(|i| {
            if (i % width + i / width) % 2 == 0 {
                colors::LIGHT
            } else {
                colors::DARK
            }
        })
        .collect()
}

pub fn uniform(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    color.repeat(width * height)
}

/// Flat left half, checkerboard right half
pub fn half_sharp(width: usize, height: usize) -> Vec<u8> {
    let sharp = checkerboard(width, height);
    (0..width * height)
        .flat_map(|i| {
            if i % width < width / 2 {
                colors::FLAT
            } else {
                [sharp[i * 3], sharp[i * 3 + 1], sharp[i * 3 + 2]]
            }
        })
        .collect()
}

/// Encode 8-bit pixels as PNG bytes.
pub fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// Temporary directory that cleans up on drop
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGB PNG and return its path.
    pub fn write_rgb_png(&self, name: &str, width: u32, height: u32, data: &[u8]) -> PathBuf {
        self.write_png(name, width, height, png::ColorType::Rgb, data)
    }

    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: png::ColorType,
        data: &[u8],
    ) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, encode_png(width, height, color, data)).expect("write PNG");
        path
    }

    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path("config.yaml");
        std::fs::write(&path, yaml).expect("write config");
        path
    }
}
