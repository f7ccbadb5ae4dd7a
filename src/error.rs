//! Error types.

use thiserror::Error;

use crate::Rectangle;

/// Errors returned at the crate boundary.
///
/// Tree operations are total over valid input, so every variant here is an
/// input validation failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A bound was constructed with `min > max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound as given.
        min: i64,
        /// Upper bound as given.
        max: i64,
    },

    /// A tree area has zero extent on at least one axis.
    #[error("tree area {area} is empty")]
    EmptyArea {
        /// The rejected area.
        area: Rectangle,
    },

    /// An object is not contained in the tree's half-open area.
    #[error("object {hash:#018x} is not contained in the tree area")]
    OutOfBounds {
        /// Content hash of the rejected object.
        hash: u64,
    },

    /// Tree configuration could not be parsed.
    #[cfg(feature = "config")]
    #[error("invalid tree configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Tree configuration could not be rendered.
    #[cfg(feature = "config")]
    #[error("cannot serialize tree configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
