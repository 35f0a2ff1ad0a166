//! Error types for boundary deduplication.
//!
//! Every error is raised while ingesting geometry, features or configuration.
//! Classification, ranking, blacklist construction and filtering never fail.

use thiserror::Error;

use crate::feature::FeatureId;

/// Errors that can occur while building the inputs of a deduplication run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DedupError {
    /// A polyline needs at least two vertices.
    #[error("polyline has {points} point(s), at least 2 are required")]
    TooFewPoints {
        /// Number of points supplied.
        points: usize,
    },

    /// A vertex has a non-finite coordinate or a latitude outside [-90, 90].
    #[error("invalid coordinate at vertex {index}")]
    InvalidCoordinate {
        /// Index of the offending vertex.
        index: usize,
    },

    /// Two consecutive vertices are antipodal, so the arc between them is undefined.
    #[error("vertex {index} is antipodal to the next vertex")]
    AntipodalVertices {
        /// Index of the first vertex of the pair.
        index: usize,
    },

    /// All vertices coincide.
    #[error("polyline has zero arc length")]
    ZeroLength,

    /// A feature was built without any geometry.
    #[error("feature {0} has no geometries")]
    EmptyFeature(FeatureId),

    /// A collection already holds a feature with this identifier.
    #[error("duplicate feature id {0}")]
    DuplicateFeatureId(FeatureId),

    /// Planet radius or search distance is not a positive finite number.
    #[error("invalid proximity: {0}")]
    InvalidProximity(&'static str),
}

/// Result type for fallible deduplication operations.
pub type Result<T> = std::result::Result<T, DedupError>;
