//! Seams for the collaborators the planner consumes but does not own.
//!
//! The engine only needs a distance metric and a way to turn a point cloud
//! into centroids. Both are kept behind traits so tests can swap in
//! predictable implementations.

use crate::error::PlannerResult;
use crate::model::GeoPoint;

/// Computes the distance between two coordinates in kilometers.
///
/// Implementations must be symmetric and non-negative, and return zero for
/// identical coordinates.
pub trait DistanceProvider {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Groups 2-D coordinates into `k` clusters and returns their centroids.
///
/// The same `seed` must always produce the same centroids for the same input.
pub trait ClusteringProvider {
    fn centroids(&self, points: &[GeoPoint], k: usize, seed: u64) -> PlannerResult<Vec<GeoPoint>>;
}
