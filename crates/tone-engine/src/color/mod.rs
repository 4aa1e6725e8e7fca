//! Color types and conversion utilities
//!
//! Every conversion here is a pure, total function: degenerate inputs
//! (zero luminance, empty lists, saturated channels, NaN) produce a
//! documented fallback value instead of an error.
//!
//! # Color Spaces
//!
//! - [`Rgb8`] / [`NormalizedRgb`]: gamma-encoded device sRGB. Use for I/O.
//! - [`LinearRgb`]: linear light. The only input the XYZ matrix accepts.
//! - [`Xyz`] / [`Chromaticity`]: CIE 1931 tristimulus and xy coordinates.
//! - [`Lms`]: Hunt-Pointer-Estevez cone responses.
//! - [`YCbCr`]: full-range BT.601 luma/chroma.
//! - [`Lab`]: CIELAB, used for perceptual distance against shade guides.
//!
//! # Example
//!
//! ```
//! use tone_engine::color::{estimate_cct_from_rgb, rgb_to_lab, rgb_to_xyz, xyz_to_rgb, Rgb8};
//!
//! let enamel = Rgb8::new(236, 228, 206);
//! let xyz = rgb_to_xyz(enamel);
//! let back = xyz_to_rgb(xyz);
//! assert!((back.g as i16 - enamel.g as i16).abs() <= 1);
//!
//! let lab = rgb_to_lab(enamel);
//! assert!(lab.b > 0.0); // yellowish
//! assert!(estimate_cct_from_rgb(enamel) < 6500.0);
//! ```

mod cct;
mod error;
mod lab;
mod linear_rgb;
mod lms;
mod rgb;
mod transfer;
mod xyz;
mod ycbcr;

pub use cct::{estimate_cct, estimate_cct_from_rgb, CCT_MAX_KELVIN, CCT_MIN_KELVIN};
pub use error::ParseColorError;
pub use lab::{lab_to_rgb, rgb_to_lab, Lab};
pub use linear_rgb::LinearRgb;
pub use lms::{lms_to_xyz, xyz_to_lms, Lms, LMS_TO_XYZ, XYZ_TO_LMS};
pub use rgb::{average_rgb, color_difference, denormalize_rgb, normalize_rgb, NormalizedRgb, Rgb8};
pub use transfer::{decode_srgb, encode_srgb, linear_to_srgb, srgb_to_linear};
pub use xyz::{
    rgb_to_chromaticity, rgb_to_xyz, xyz_to_chromaticity, xyz_to_rgb, Chromaticity, Xyz,
    D65_WHITE, SRGB_TO_XYZ, XYZ_TO_SRGB,
};
pub use ycbcr::{rgb_to_ycbcr, ycbcr_to_rgb, YCbCr};
