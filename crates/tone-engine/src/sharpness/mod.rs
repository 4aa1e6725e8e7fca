//! Focus quality from the variance of the Laplacian
//!
//! ```text
//! RgbImage --luma--> GrayImage --3x3 Laplacian--> response (border = 0)
//!                                                    |
//!                                      variance over interior pixels
//!                                                    |
//!                         +--------------------------+------------------+
//!                         v                                             v
//!            score 0..=100 (piecewise linear)          verdict (80 / 120 / 500)
//! ```
//!
//! The pipeline is stateless; a blurry or uniform image simply yields a
//! `Rejected` verdict.

mod analyzer;
mod laplacian;
mod score;

pub use analyzer::{analyze_sharpness, analyze_sharpness_from_gray, SharpnessResult};
pub use laplacian::{apply_laplacian_filter, calculate_laplacian_variance, LAPLACIAN_KERNEL};
pub use score::{
    normalize_sharpness_score, sharpness_feedback, sharpness_verdict, SharpnessVerdict,
    ACCEPTABLE_MAX_VARIANCE, REJECT_MAX_VARIANCE, SATURATION_VARIANCE, SCORE_CURVE,
    WARNING_MAX_VARIANCE,
};
