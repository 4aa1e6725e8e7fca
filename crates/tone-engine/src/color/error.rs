//! Error type for device color parsing

use std::fmt;
use std::num::ParseIntError;

/// Failure to parse a `#RRGGBB` / `#RGB` device color.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Digit count after stripping `#` was neither 3 nor 6
    InvalidLength {
        /// Number of hex digits found
        len: usize,
    },
    /// A character was not a hex digit (`+` and `-` included)
    InvalidDigit {
        /// First offending character
        digit: char,
    },
    /// A digit was not hexadecimal
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { len } => {
                write!(f, "expected 3 or 6 hex digits, found {}", len)
            }
            ParseColorError::InvalidDigit { digit } => write!(f, "invalid hex digit '{}'", digit),
            ParseColorError::InvalidHex(err) => write!(f, "invalid hex digit: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            ParseColorError::InvalidLength { .. } | ParseColorError::InvalidDigit { .. } => None,
        }
    }
}
