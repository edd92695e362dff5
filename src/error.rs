//! Errors shared by every layout in the crate.

use core::fmt;

/// Why a grid configuration was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// A per-line item count was zero.
    ZeroItemCount,
    /// The first line holds more items than the lines after it.
    FirstRowWider,
    /// Item spacing was negative or not finite.
    NegativeSpacing,
    /// Aspect ratio side was zero, negative, or not finite.
    InvalidAspectRatio,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroItemCount => "item count per line must be at least 1",
            Self::FirstRowWider => "first line cannot hold more items than subsequent lines",
            Self::NegativeSpacing => "item spacing must be finite and non-negative",
            Self::InvalidAspectRatio => "aspect ratio sides must be finite and positive",
        })
    }
}

/// Layout error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// Construction parameters cannot describe a grid.
    InvalidConfiguration(ConfigError),
    /// Item index was negative.
    InvalidIndex(i64),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "invalid grid configuration: {e}"),
            Self::InvalidIndex(i) => write!(f, "invalid item index {i}"),
        }
    }
}

impl core::error::Error for LayoutError {}

impl From<ConfigError> for LayoutError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
