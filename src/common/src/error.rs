//! System-wide error types for keygate.

use core::fmt;

/// Line buffer error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineError {
    /// The line already holds as many bytes as it can
    Full,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Full => write!(f, "line buffer full"),
        }
    }
}
