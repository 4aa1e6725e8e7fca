//! Qualitative readings of shades and raw Lab measurements.
//!
//! Every function here is total: unknown ids and degenerate Lab values map
//! to a documented neutral answer.

use std::fmt;

use super::reference::ShadeGuide;
use crate::color::Lab;

/// b* at or below which yellowness is minimal.
pub const YELLOWNESS_MINIMAL_MAX_B: f32 = 12.0;
/// b* at or below which yellowness is mild.
pub const YELLOWNESS_MILD_MAX_B: f32 = 16.0;
/// b* at or below which yellowness is moderate; above it is significant.
pub const YELLOWNESS_MODERATE_MAX_B: f32 = 20.0;

/// Five ordered brightness bands, brightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrightnessLevel {
    VeryBright,
    Bright,
    Medium,
    Dark,
    VeryDark,
}

impl BrightnessLevel {
    const BANDS: [BrightnessLevel; 5] = [
        BrightnessLevel::VeryBright,
        BrightnessLevel::Bright,
        BrightnessLevel::Medium,
        BrightnessLevel::Dark,
        BrightnessLevel::VeryDark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BrightnessLevel::VeryBright => "very_bright",
            BrightnessLevel::Bright => "bright",
            BrightnessLevel::Medium => "medium",
            BrightnessLevel::Dark => "dark",
            BrightnessLevel::VeryDark => "very_dark",
        }
    }

    fn description(self) -> &'static str {
        match self {
            BrightnessLevel::VeryBright => "Among the brightest natural shades.",
            BrightnessLevel::Bright => "Brighter than average.",
            BrightnessLevel::Medium => "Average natural brightness.",
            BrightnessLevel::Dark => "Darker than average.",
            BrightnessLevel::VeryDark => "Among the darkest natural shades.",
        }
    }
}

impl fmt::Display for BrightnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BLEACHED_DESCRIPTION: &str =
    "Brighter than any natural shade; typical after whitening treatment.";
const UNKNOWN_SHADE_DESCRIPTION: &str = "No brightness data for this shade.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessInterpretation {
    pub level: BrightnessLevel,
    pub description: &'static str,
}

/// Yellowness from the b* channel, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YellownessLevel {
    Minimal,
    Mild,
    Moderate,
    Significant,
}

impl YellownessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            YellownessLevel::Minimal => "minimal",
            YellownessLevel::Mild => "mild",
            YellownessLevel::Moderate => "moderate",
            YellownessLevel::Significant => "significant",
        }
    }

    fn description(self) -> &'static str {
        match self {
            YellownessLevel::Minimal => "Little to no yellow tint.",
            YellownessLevel::Mild => "A slight yellow tint.",
            YellownessLevel::Moderate => "A noticeable yellow tint.",
            YellownessLevel::Significant => "A strong yellow tint.",
        }
    }
}

impl fmt::Display for YellownessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YellownessInterpretation {
    pub level: YellownessLevel,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undertone {
    Warm,
    Neutral,
    Cool,
}

impl Undertone {
    pub fn as_str(self) -> &'static str {
        match self {
            Undertone::Warm => "warm",
            Undertone::Neutral => "neutral",
            Undertone::Cool => "cool",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndertoneReading {
    pub undertone: Undertone,
    /// 0..=1
    pub confidence: f32,
}

impl ShadeGuide {
    /// Brightness band of an entry.
    ///
    /// Bleached entries are `VeryBright` with their own description. Natural
    /// ranks split evenly into five bands over `1..=max_natural_rank`; an
    /// unknown id is `Medium` with a "no data" description.
    pub fn interpret_brightness(&self, id: &str) -> BrightnessInterpretation {
        let Some(entry) = self.get(id) else {
            return BrightnessInterpretation {
                level: BrightnessLevel::Medium,
                description: UNKNOWN_SHADE_DESCRIPTION,
            };
        };
        if entry.is_bleached() {
            return BrightnessInterpretation {
                level: BrightnessLevel::VeryBright,
                description: BLEACHED_DESCRIPTION,
            };
        }

        let bands = BrightnessLevel::BANDS.len() as u64;
        let span = u64::from(self.max_natural_rank().max(1));
        let band = (u64::from(entry.brightness_rank - 1) * bands / span).min(bands - 1);
        let level = BrightnessLevel::BANDS[band as usize];
        BrightnessInterpretation {
            level,
            description: level.description(),
        }
    }
}

/// Brightness band of a built-in VITA shade.
///
/// # Example
/// ```
/// use tone_engine::{interpret_brightness, BrightnessLevel};
/// assert_eq!(interpret_brightness("B1").level, BrightnessLevel::VeryBright);
/// assert_eq!(interpret_brightness("C4").level, BrightnessLevel::VeryDark);
/// assert_eq!(interpret_brightness("??").level, BrightnessLevel::Medium);
/// ```
pub fn interpret_brightness(id: &str) -> BrightnessInterpretation {
    ShadeGuide::vita().interpret_brightness(id)
}

/// Classify yellowness on b*; a value on a breakpoint takes the lower band.
///
/// NaN reads as `Minimal`.
pub fn interpret_yellowness(lab: Lab) -> YellownessInterpretation {
    let b = lab.b;
    let level = if !(b > YELLOWNESS_MINIMAL_MAX_B) {
        YellownessLevel::Minimal
    } else if b <= YELLOWNESS_MILD_MAX_B {
        YellownessLevel::Mild
    } else if b <= YELLOWNESS_MODERATE_MAX_B {
        YellownessLevel::Moderate
    } else {
        YellownessLevel::Significant
    };
    YellownessInterpretation {
        level,
        description: level.description(),
    }
}

/// Warm/neutral/cool reading from a* and b*.
///
/// Yellow (b* > 0) pushes warm; blue (b* < 0) and red (a* > 0) push cool.
/// A side must clear 0.3 and beat the other to win. Non-finite input reads
/// as neutral with zero confidence.
pub fn interpret_undertone(lab: Lab) -> UndertoneReading {
    if !(lab.a.is_finite() && lab.b.is_finite()) {
        return UndertoneReading {
            undertone: Undertone::Neutral,
            confidence: 0.0,
        };
    }

    let warm = lab.b / 30.0;
    let cool = -lab.b / 30.0 + lab.a / 20.0;
    if warm > 0.3 && warm > cool {
        UndertoneReading {
            undertone: Undertone::Warm,
            confidence: (warm * 2.0).clamp(0.0, 1.0),
        }
    } else if cool > 0.3 && cool > warm {
        UndertoneReading {
            undertone: Undertone::Cool,
            confidence: (cool * 2.0).clamp(0.0, 1.0),
        }
    } else {
        UndertoneReading {
            undertone: Undertone::Neutral,
            confidence: (1.0 - (warm - cool).abs()).clamp(0.3, 0.8),
        }
    }
}
