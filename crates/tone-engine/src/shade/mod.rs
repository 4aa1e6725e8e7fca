//! Reference shade guides and perceptual matching
//!
//! A [`ShadeGuide`] is a small table of named Lab colors, each with a
//! series tag and a brightness rank (0 for the bleached group, then 1 for
//! the brightest natural shade upward). The built-in VITA guide is built
//! once on first use and shared read-only; custom guides (for example
//! personal-color season palettes) go through [`ShadeGuide::new`].
//!
//! The free functions operate on the built-in guide.

mod error;
mod interpret;
mod matching;
mod reference;

pub use error::GuideError;
pub use interpret::{
    interpret_brightness, interpret_undertone, interpret_yellowness, BrightnessInterpretation,
    BrightnessLevel, Undertone, UndertoneReading, YellownessInterpretation, YellownessLevel,
    YELLOWNESS_MILD_MAX_B, YELLOWNESS_MINIMAL_MAX_B, YELLOWNESS_MODERATE_MAX_B,
};
pub use matching::{
    calculate_shade_steps, find_best_shade_match, ShadeCandidate, ShadeMatch, ALTERNATIVE_COUNT,
};
pub use reference::{
    get_shade_reference, ShadeGuide, ShadeReference, BLEACHED_RANK, BLEACHED_SERIES, VITA_SHADES,
};
