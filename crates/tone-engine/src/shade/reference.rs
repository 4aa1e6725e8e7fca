//! Reference shade tables and the validated [`ShadeGuide`] built from them.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::error::GuideError;
use crate::color::Lab;

/// Brightness rank reserved for the bleached group, brighter than any
/// natural shade.
pub const BLEACHED_RANK: u32 = 0;

/// Series tag of the built-in bleached entries.
pub const BLEACHED_SERIES: &str = "bleached";

/// One named entry of a shade guide.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeReference {
    pub id: Cow<'static, str>,
    /// Group tag (`"A"`..`"D"` hue families, or `"bleached"`)
    pub series: Cow<'static, str>,
    pub lab: Lab,
    /// 0 for the bleached group, then 1 (brightest natural) upward
    pub brightness_rank: u32,
}

impl ShadeReference {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        series: impl Into<Cow<'static, str>>,
        lab: Lab,
        brightness_rank: u32,
    ) -> Self {
        Self {
            id: id.into(),
            series: series.into(),
            lab,
            brightness_rank,
        }
    }

    const fn builtin(id: &'static str, series: &'static str, lab: Lab, rank: u32) -> Self {
        Self {
            id: Cow::Borrowed(id),
            series: Cow::Borrowed(series),
            lab,
            brightness_rank: rank,
        }
    }

    /// True for entries of the bleached group.
    #[inline]
    pub fn is_bleached(&self) -> bool {
        self.brightness_rank == BLEACHED_RANK
    }
}

/// The VITA classical guide extended with three bleached shades.
///
/// Lab values are averaged spectrophotometer readings of physical shade
/// tabs; ranks follow the manufacturer's value-oriented ordering.
pub static VITA_SHADES: [ShadeReference; 19] = [
    ShadeReference::builtin("0M1", BLEACHED_SERIES, Lab::new(84.0, -0.5, 4.0), 0),
    ShadeReference::builtin("0M2", BLEACHED_SERIES, Lab::new(82.0, 0.0, 6.0), 0),
    ShadeReference::builtin("0M3", BLEACHED_SERIES, Lab::new(80.0, 0.5, 8.0), 0),
    ShadeReference::builtin("B1", "B", Lab::new(78.5, -0.3, 10.0), 1),
    ShadeReference::builtin("A1", "A", Lab::new(76.0, 0.6, 12.5), 2),
    ShadeReference::builtin("B2", "B", Lab::new(75.0, -0.2, 15.8), 3),
    ShadeReference::builtin("D2", "D", Lab::new(73.5, 0.8, 11.5), 4),
    ShadeReference::builtin("A2", "A", Lab::new(71.0, 1.5, 15.0), 5),
    ShadeReference::builtin("C1", "C", Lab::new(70.5, -0.2, 12.0), 6),
    ShadeReference::builtin("C2", "C", Lab::new(68.0, 0.4, 14.5), 7),
    ShadeReference::builtin("D4", "D", Lab::new(67.5, 1.2, 15.5), 8),
    ShadeReference::builtin("A3", "A", Lab::new(67.0, 2.2, 18.0), 9),
    ShadeReference::builtin("D3", "D", Lab::new(66.0, 1.5, 14.0), 10),
    ShadeReference::builtin("B3", "B", Lab::new(65.5, 1.6, 20.5), 11),
    ShadeReference::builtin("A3.5", "A", Lab::new(64.0, 3.0, 20.0), 12),
    ShadeReference::builtin("B4", "B", Lab::new(63.5, 2.0, 22.0), 13),
    ShadeReference::builtin("C3", "C", Lab::new(62.0, 0.8, 15.5), 14),
    ShadeReference::builtin("A4", "A", Lab::new(60.5, 3.6, 21.5), 15),
    ShadeReference::builtin("C4", "C", Lab::new(57.0, 1.8, 17.5), 16),
];

/// Lookup key: ids match regardless of case and surrounding whitespace.
fn id_key(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

/// A validated, immutable set of reference shades.
///
/// Holds the entries in their original order, an id index and the
/// brightness-ordered index (by rank, then original position). Nothing is
/// mutated after construction, so a guide can be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use tone_engine::{Lab, ShadeGuide, ShadeReference};
///
/// let guide = ShadeGuide::new(vec![
///     ShadeReference::new("spring", "warm", Lab::new(72.0, 8.0, 20.0), 1),
///     ShadeReference::new("winter", "cool", Lab::new(55.0, 4.0, -2.0), 2),
/// ])
/// .unwrap();
///
/// assert_eq!(guide.len(), 2);
/// assert_eq!(guide.get("SPRING").unwrap().series, "warm");
/// ```
#[derive(Debug, Clone)]
pub struct ShadeGuide {
    entries: Vec<ShadeReference>,
    by_id: HashMap<String, usize>,
    brightness_order: Vec<usize>,
    max_natural_rank: u32,
}

impl ShadeGuide {
    /// Build a guide from caller-supplied entries.
    ///
    /// # Errors
    ///
    /// - [`GuideError::Empty`] for an empty list
    /// - [`GuideError::BlankId`] if an id is empty after trimming
    /// - [`GuideError::DuplicateId`] if two ids collide case-insensitively
    /// - [`GuideError::NonFiniteLab`] if a Lab component is NaN or infinite
    pub fn new(entries: Vec<ShadeReference>) -> Result<Self, GuideError> {
        if entries.is_empty() {
            return Err(GuideError::Empty);
        }
        let mut seen = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let key = id_key(&entry.id);
            if key.is_empty() {
                return Err(GuideError::BlankId { index });
            }
            if !entry.lab.is_finite() {
                return Err(GuideError::NonFiniteLab {
                    id: entry.id.to_string(),
                });
            }
            if seen.insert(key, index).is_some() {
                return Err(GuideError::DuplicateId {
                    id: entry.id.to_string(),
                });
            }
        }
        Ok(Self::build(entries))
    }

    /// Index an already valid entry list.
    fn build(entries: Vec<ShadeReference>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (id_key(&e.id), i))
            .collect();

        let mut brightness_order: Vec<usize> = (0..entries.len()).collect();
        // Stable: equal ranks keep table order
        brightness_order.sort_by_key(|&i| entries[i].brightness_rank);

        let max_natural_rank = entries
            .iter()
            .map(|e| e.brightness_rank)
            .max()
            .unwrap_or(BLEACHED_RANK);

        Self {
            entries,
            by_id,
            brightness_order,
            max_natural_rank,
        }
    }

    /// The built-in VITA guide, initialised on first use.
    pub fn vita() -> &'static ShadeGuide {
        static VITA: OnceLock<ShadeGuide> = OnceLock::new();
        VITA.get_or_init(|| ShadeGuide::build(VITA_SHADES.to_vec()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed guide.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their original table order.
    #[inline]
    pub fn entries(&self) -> &[ShadeReference] {
        &self.entries
    }

    /// Look up an entry by id (case-insensitive, trimmed).
    pub fn get(&self, id: &str) -> Option<&ShadeReference> {
        self.position(id).map(|i| &self.entries[i])
    }

    /// Entries from brightest to darkest.
    pub fn brightness_order(&self) -> impl Iterator<Item = &ShadeReference> + '_ {
        self.brightness_order.iter().map(|&i| &self.entries[i])
    }

    /// Highest rank in the guide; the darkest natural shade.
    #[inline]
    pub fn max_natural_rank(&self) -> u32 {
        self.max_natural_rank
    }

    #[inline]
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(&id_key(id)).copied()
    }
}

/// Look up a built-in VITA shade; `None` for an unknown id.
///
/// # Example
/// ```
/// use tone_engine::get_shade_reference;
/// assert_eq!(get_shade_reference("a2").unwrap().brightness_rank, 5);
/// assert!(get_shade_reference("Z9").is_none());
/// ```
pub fn get_shade_reference(id: &str) -> Option<&'static ShadeReference> {
    ShadeGuide::vita().get(id)
}
