//! Crate-level error types.

use std::fmt;

/// Errors produced by the surfview crate.
///
/// The mathematical preconditions of the core (arcsine domain, degenerate
/// rotation axes, zero viewport dimensions) are guarded internally and never
/// surface here; these variants cover configuration I/O and model handoff
/// only.
#[derive(Debug)]
pub enum ViewerError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The model reported a non-positive scale, so the render-time
    /// centering translation is undefined.
    InvalidModelScale(f32),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidModelScale(scale) => {
                write!(f, "invalid model scale: {scale}")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
