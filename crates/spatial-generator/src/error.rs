//! Error type for generator operations.

use std::fmt;

/// Coordinate axis named in bounds errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Bounds are inverted, not finite, or narrower than one granularity step
    #[error("Invalid {axis} bounds: [{min}, {max}]")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    /// Granularity must be at least 1
    #[error("Invalid granularity: {0}")]
    InvalidGranularity(u32),

    /// Collection size range is inverted or allows an empty collection
    #[error("Invalid {what} count range: [{min}, {max}]")]
    InvalidCount {
        what: &'static str,
        min: usize,
        max: usize,
    },

    /// Line strings need at least two points
    #[error("A line string needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// No generator registered for the field type
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// Model not found in schema
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] spatial_core::SchemaError),
}
