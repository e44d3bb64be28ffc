//! Error types for codefolio.

use std::fmt;
use std::io;

/// Result type alias for codefolio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for codefolio operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal or preference-file operations.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Preference file exists but could not be serialized/deserialized.
    InvalidPreference(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidPreference(s) => write!(f, "invalid preference data: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidPreference(e.to_string())
    }
}
