//! Defines [`GeoBridgeError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::datatypes::Dimension;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoBridgeError {
    /// A line string or ring was constructed with fewer coordinates than it needs.
    #[error("{geometry} requires at least {required} points, got {actual}")]
    TooFewPoints {
        /// The geometry being constructed.
        geometry: &'static str,
        /// Minimum number of points.
        required: usize,
        /// Number of points provided.
        actual: usize,
    },

    /// A linear ring whose first and last coordinates differ.
    #[error("Linear ring is not closed")]
    RingNotClosed,

    /// A polygon without an exterior ring.
    #[error("Polygon requires at least one ring")]
    TooFewRings,

    /// The GeoJSON `"type"` member is missing or not a known GeoJSON type.
    #[error("Invalid GeoJSON type: {0}")]
    InvalidGeoJsonType(String),

    /// The GeoJSON `"type"` is valid but not the one being decoded.
    #[error("Mismatched GeoJSON type: expected {expected}, found {found}")]
    MismatchedGeoJsonType {
        /// The type(s) the caller decodes for.
        expected: String,
        /// The type found in the payload.
        found: String,
    },

    /// Coordinates missing, mis-nested or of the wrong length for the coordinate kind.
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// A feature `"id"` that is neither a string nor a number.
    #[error("Feature id must be a string or a number")]
    InvalidFeatureId,

    /// The native engine signalled a failure; carries the accumulated diagnostics.
    #[error("Engine error: {0}")]
    Engine(String),

    /// A runtime-dimensioned geometry does not have the requested coordinate kind.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Requested dimension.
        expected: Dimension,
        /// Actual dimension.
        found: Dimension,
    },

    /// Malformed JSON text.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoBridgeError>;
