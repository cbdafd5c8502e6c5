//! Planner error type.

use thiserror::Error;

/// Errors raised while placing facilities, assigning deliveries or comparing
/// strategies.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// No delivery points were loaded when placement was attempted.
    #[error("no delivery points loaded")]
    EmptyInput,

    /// Malformed strategy arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Assignment was attempted with an empty facility set.
    #[error("no facilities placed")]
    NoFacilities,

    /// The comparator was given nothing to compare.
    #[error("no strategies to compare")]
    NoStrategies,

    /// The clustering backend failed to produce centroids.
    #[error("clustering failed: {0}")]
    Clustering(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the planner.
pub type PlannerResult<T> = Result<T, PlannerError>;
