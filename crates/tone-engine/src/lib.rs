#![allow(
    clippy::excessive_precision,
    clippy::manual_range_contains,
    clippy::module_inception,
    clippy::needless_range_loop
)]

//! tone-engine: color features, focus scoring and shade matching for photos
//!
//! This library turns raw pixels from a face, skin or teeth photo into
//! calibrated color-science features, an objective focus score, and a
//! nearest match against a reference shade guide. Every analysis is a pure
//! function over caller-owned buffers: no I/O, no logging, no shared
//! mutable state.
//!
//! # Quick Start
//!
//! The [`ToneAnalyzer`] builder is the primary entry point:
//!
//! ```
//! use tone_engine::{RgbImage, SharpnessVerdict, ToneAnalyzer};
//!
//! // 1-pixel checkerboard of two enamel tones: plenty of edge detail
//! let (light, dark) = ([246u8, 238, 218], [170u8, 158, 128]);
//! let data: Vec<u8> = (0..16 * 16)
//!     .flat_map(|i| if (i % 16 + i / 16) % 2 == 0 { light } else { dark })
//!     .collect();
//! let image = RgbImage::new(&data, 16, 16).unwrap();
//!
//! let report = ToneAnalyzer::new().exclude_bleached(true).analyze(&image).unwrap();
//! assert_eq!(report.sharpness.verdict, SharpnessVerdict::Optimal);
//!
//! let shade = report.shade.unwrap();
//! assert!(!shade.shade_match.id.starts_with("0M"));
//! ```
//!
//! # Individual Stages
//!
//! Each stage is usable on its own:
//!
//! ```
//! use tone_engine::{
//!     analyze_sharpness_from_gray, calculate_shade_steps, estimate_cct, find_best_shade_match,
//!     interpret_yellowness, Chromaticity, GrayImage, Lab, SharpnessVerdict, YellownessLevel,
//! };
//!
//! let cct = estimate_cct(Chromaticity::D65);
//! assert!((cct - 6500.0).abs() < 150.0);
//!
//! let flat = [128u8; 400];
//! let focus = analyze_sharpness_from_gray(&GrayImage::new(&flat, 20, 20).unwrap());
//! assert_eq!(focus.verdict, SharpnessVerdict::Rejected);
//!
//! let m = find_best_shade_match(Lab::new(71.0, 1.5, 15.0), false);
//! assert_eq!((m.id.as_str(), m.delta_e), ("A2", 0.0));
//! assert!(calculate_shade_steps("A3", "A1") > 0);
//! assert_eq!(
//!     interpret_yellowness(Lab::new(70.0, 0.0, 16.0)).level,
//!     YellownessLevel::Mild
//! );
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbImage (+ optional Region)
//!     |
//!     +---> luma plane --> Laplacian --> variance --> score + verdict
//!     |                                                   |
//!     v                                           quality gate
//! average Rgb8                                            |
//!     |                                                   |
//!     v                                                   |
//! LinearRgb --> Xyz --+--> Chromaticity --> CCT           |
//!                     +--> Lms                            |
//!                     +--> Lab ---------------------------+--> shade match
//!                                                              brightness
//!                                                              yellowness
//!                                                              undertone
//! ```
//!
//! # Fixed Constants
//!
//! The Laplacian kernel, the sharpness breakpoints (80 / 120 / 500, score
//! saturating at 1000), the yellowness breakpoints (12 / 16 / 20), the
//! conversion matrices and the VITA table are constants of the library.
//! Values exactly on a breakpoint always belong to the lower band.

pub mod api;
pub mod color;
pub mod image;
pub mod shade;
pub mod sharpness;

#[cfg(test)]
mod domain_tests;

pub use api::{EngineError, ShadeReading, ToneAnalyzer, ToneReport};
pub use color::{
    average_rgb, color_difference, denormalize_rgb, estimate_cct, estimate_cct_from_rgb,
    lab_to_rgb, linear_to_srgb, lms_to_xyz, normalize_rgb, rgb_to_chromaticity, rgb_to_lab,
    rgb_to_xyz, rgb_to_ycbcr, srgb_to_linear, xyz_to_chromaticity, xyz_to_lms, xyz_to_rgb,
    ycbcr_to_rgb, Chromaticity, Lab, LinearRgb, Lms, NormalizedRgb, ParseColorError, Rgb8, Xyz,
    YCbCr,
};
pub use image::{rgb_to_grayscale, GrayImage, ImageError, Region, RgbImage};
pub use shade::{
    calculate_shade_steps, find_best_shade_match, get_shade_reference, interpret_brightness,
    interpret_undertone, interpret_yellowness, BrightnessInterpretation, BrightnessLevel,
    GuideError, ShadeCandidate, ShadeGuide, ShadeMatch, ShadeReference, Undertone,
    UndertoneReading, YellownessInterpretation, YellownessLevel,
};
pub use sharpness::{
    analyze_sharpness, analyze_sharpness_from_gray, normalize_sharpness_score,
    sharpness_feedback, sharpness_verdict, SharpnessResult, SharpnessVerdict,
};
