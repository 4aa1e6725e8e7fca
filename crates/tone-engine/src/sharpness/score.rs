//! Variance-to-score curve and the quality verdict.
//!
//! The breakpoints are empirically chosen quality thresholds for phone
//! photos of faces and teeth at typical capture distance. Score and
//! verdict share them, and a variance exactly on a breakpoint belongs to
//! the lower band in both.

use std::fmt;

/// Variance at or below which a photo is rejected.
pub const REJECT_MAX_VARIANCE: f64 = 80.0;
/// Variance at or below which a photo only earns a warning.
pub const WARNING_MAX_VARIANCE: f64 = 120.0;
/// Variance at or below which a photo is acceptable; above it is optimal.
pub const ACCEPTABLE_MAX_VARIANCE: f64 = 500.0;
/// Variance at which the score saturates at 100.
pub const SATURATION_VARIANCE: f64 = 1000.0;

/// Control points of the piecewise-linear score curve, `(variance, score)`.
///
/// Steep below 80 so obvious blur is penalised hard; flat above 500 where
/// extra detail adds little.
pub const SCORE_CURVE: [(f64, f64); 5] = [
    (0.0, 0.0),
    (REJECT_MAX_VARIANCE, 30.0),
    (WARNING_MAX_VARIANCE, 50.0),
    (ACCEPTABLE_MAX_VARIANCE, 90.0),
    (SATURATION_VARIANCE, 100.0),
];

/// Ordered focus-quality verdict, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SharpnessVerdict {
    /// Too blurry to analyse; ask for a retake
    Rejected,
    /// Usable only with caution
    Warning,
    /// Good enough for color interpretation
    Acceptable,
    /// Clearly in focus
    Optimal,
}

impl SharpnessVerdict {
    /// All verdicts, worst first.
    pub const ALL: [SharpnessVerdict; 4] = [
        SharpnessVerdict::Rejected,
        SharpnessVerdict::Warning,
        SharpnessVerdict::Acceptable,
        SharpnessVerdict::Optimal,
    ];

    /// Lowercase identifier (`"rejected"`, `"warning"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            SharpnessVerdict::Rejected => "rejected",
            SharpnessVerdict::Warning => "warning",
            SharpnessVerdict::Acceptable => "acceptable",
            SharpnessVerdict::Optimal => "optimal",
        }
    }

    /// Parse the identifier produced by [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Fixed user-facing message for this verdict.
    pub fn feedback(self) -> &'static str {
        sharpness_feedback(self)
    }

    /// Inclusive score range that corresponds to this verdict.
    pub fn score_range(self) -> (u8, u8) {
        match self {
            SharpnessVerdict::Rejected => (0, 30),
            SharpnessVerdict::Warning => (31, 50),
            SharpnessVerdict::Acceptable => (51, 90),
            SharpnessVerdict::Optimal => (91, 100),
        }
    }
}

impl fmt::Display for SharpnessVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a Laplacian variance onto 0..=100.
///
/// Linear interpolation between [`SCORE_CURVE`] points, rounded up to the
/// next integer and kept inside the [`SharpnessVerdict::score_range`] of
/// the variance's verdict, so any variance strictly above a breakpoint
/// scores strictly above that breakpoint's score. Non-positive or NaN
/// variance scores 0.
///
/// # Example
/// ```
/// use tone_engine::normalize_sharpness_score;
/// assert_eq!(normalize_sharpness_score(80.0), 30);
/// assert_eq!(normalize_sharpness_score(120.0), 50);
/// assert_eq!(normalize_sharpness_score(500.0), 90);
/// assert_eq!(normalize_sharpness_score(1000.0), 100);
/// ```
pub fn normalize_sharpness_score(variance: f64) -> u8 {
    if !(variance > 0.0) {
        return 0;
    }
    if variance >= SATURATION_VARIANCE {
        return 100;
    }

    let raw = SCORE_CURVE
        .windows(2)
        .find(|seg| variance <= seg[1].0)
        .map(|seg| {
            let (v0, s0) = seg[0];
            let (v1, s1) = seg[1];
            s0 + (variance - v0) / (v1 - v0) * (s1 - s0)
        })
        .unwrap_or(100.0);

    // Float rounding can land a hair above a breakpoint on the breakpoint's
    // own score; the verdict band settles which side it belongs to.
    let (lo, hi) = sharpness_verdict(variance).score_range();
    raw.ceil().clamp(lo as f64, hi as f64) as u8
}

/// Classify a Laplacian variance; a value on a breakpoint takes the lower band.
pub fn sharpness_verdict(variance: f64) -> SharpnessVerdict {
    if !(variance > REJECT_MAX_VARIANCE) {
        SharpnessVerdict::Rejected
    } else if variance <= WARNING_MAX_VARIANCE {
        SharpnessVerdict::Warning
    } else if variance <= ACCEPTABLE_MAX_VARIANCE {
        SharpnessVerdict::Acceptable
    } else {
        SharpnessVerdict::Optimal
    }
}

/// Fixed, non-empty message for each verdict.
pub fn sharpness_feedback(verdict: SharpnessVerdict) -> &'static str {
    match verdict {
        SharpnessVerdict::Rejected => {
            "The photo is too blurry to analyze. Hold the camera steady and retake it in good light."
        }
        SharpnessVerdict::Warning => {
            "The photo is slightly blurry. Results may be less accurate; consider retaking it."
        }
        SharpnessVerdict::Acceptable => "The photo is sharp enough for analysis.",
        SharpnessVerdict::Optimal => "The photo is in sharp focus.",
    }
}
