//! Nearest-shade search and ordinal distance between shades.

use super::reference::ShadeGuide;
use crate::color::Lab;

/// How many runner-up shades a match reports.
pub const ALTERNATIVE_COUNT: usize = 3;

/// A shade id with its distance to the measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeCandidate {
    pub id: String,
    /// CIE76 difference to the measured color
    pub delta_e: f32,
}

/// Result of [`ShadeGuide::find_best_match`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeMatch {
    pub id: String,
    pub delta_e: f32,
    /// The next closest shades, ascending by `delta_e`
    pub alternative_matches: Vec<ShadeCandidate>,
}

impl ShadeGuide {
    /// Find the entry closest to `lab` by CIE76 ΔE.
    ///
    /// Equal distances resolve to the lower brightness rank, then to the
    /// earlier table position, so the result never depends on iteration
    /// order. With `exclude_bleached` the bleached group is skipped unless
    /// that would leave nothing to match. A non-finite measurement gets
    /// infinite distance to every entry.
    pub fn find_best_match(&self, lab: Lab, exclude_bleached: bool) -> ShadeMatch {
        let entries = self.entries();
        let excluding = exclude_bleached && entries.iter().any(|e| !e.is_bleached());

        let mut ranked: Vec<(usize, f32)> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !(excluding && e.is_bleached()))
            .map(|(i, e)| {
                let d = lab.delta_e(e.lab);
                (i, if d.is_nan() { f32::INFINITY } else { d })
            })
            .collect();

        ranked.sort_by(|&(ia, da), &(ib, db)| {
            da.total_cmp(&db)
                .then_with(|| entries[ia].brightness_rank.cmp(&entries[ib].brightness_rank))
                .then(ia.cmp(&ib))
        });

        let mut iter = ranked.into_iter().map(|(i, delta_e)| ShadeCandidate {
            id: entries[i].id.to_string(),
            delta_e,
        });
        // Guides are never empty
        let best = iter.next().unwrap_or(ShadeCandidate {
            id: String::new(),
            delta_e: f32::INFINITY,
        });

        ShadeMatch {
            id: best.id,
            delta_e: best.delta_e,
            alternative_matches: iter.take(ALTERNATIVE_COUNT).collect(),
        }
    }

    /// Signed number of rank steps from `from` to `to`.
    ///
    /// Positive when `to` is brighter than `from`; 0 for the same rank or
    /// when either id is unknown. Saturates at the `i32` range for custom
    /// guides with huge ranks.
    pub fn shade_steps(&self, from: &str, to: &str) -> i32 {
        match (self.get(from), self.get(to)) {
            // Rank 1 is brightest, so a smaller target rank is a step up
            (Some(from), Some(to)) => {
                let steps = i64::from(from.brightness_rank) - i64::from(to.brightness_rank);
                steps.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
            _ => 0,
        }
    }
}

/// Closest built-in VITA shade to a measured Lab color.
///
/// # Example
/// ```
/// use tone_engine::{find_best_shade_match, Lab};
///
/// let m = find_best_shade_match(Lab::new(71.0, 1.5, 15.0), false);
/// assert_eq!(m.id, "A2");
/// assert_eq!(m.delta_e, 0.0);
/// assert_eq!(m.alternative_matches.len(), 3);
/// ```
pub fn find_best_shade_match(lab: Lab, exclude_bleached: bool) -> ShadeMatch {
    ShadeGuide::vita().find_best_match(lab, exclude_bleached)
}

/// Signed VITA steps from `from` to `to`; positive means `to` is brighter.
///
/// # Example
/// ```
/// use tone_engine::calculate_shade_steps;
/// assert!(calculate_shade_steps("A3", "A1") > 0);
/// assert!(calculate_shade_steps("A1", "A3") < 0);
/// assert_eq!(calculate_shade_steps("A1", "nope"), 0);
/// ```
pub fn calculate_shade_steps(from: &str, to: &str) -> i32 {
    ShadeGuide::vita().shade_steps(from, to)
}
