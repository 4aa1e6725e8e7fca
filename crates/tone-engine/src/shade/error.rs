//! Error type for shade guide construction

use std::fmt;

/// Returned by [`ShadeGuide::new`](super::ShadeGuide::new) when a set of
/// reference entries cannot form a guide.
#[derive(Debug, Clone, PartialEq)]
pub enum GuideError {
    /// No entries supplied
    Empty,
    /// An entry id is empty or whitespace
    BlankId {
        /// Position of the entry in the supplied list
        index: usize,
    },
    /// Two entries share an id (ids compare case-insensitively)
    DuplicateId { id: String },
    /// An entry's Lab value has a NaN or infinite component
    NonFiniteLab { id: String },
}

impl fmt::Display for GuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideError::Empty => write!(f, "shade guide has no entries"),
            GuideError::BlankId { index } => write!(f, "entry {} has a blank id", index),
            GuideError::DuplicateId { id } => write!(f, "duplicate shade id '{}'", id),
            GuideError::NonFiniteLab { id } => {
                write!(f, "shade '{}' has a non-finite Lab value", id)
            }
        }
    }
}

impl std::error::Error for GuideError {}
