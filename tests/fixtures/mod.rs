//! Shared fixtures for planner integration tests.
//!
//! Provides a small synthetic network around the equator, where one degree of
//! longitude is ~111.19 km, plus helpers for building facilities.

#![allow(dead_code)]

use warehouse_planner::model::{CandidateSite, DeliveryPoint, Facility, GeoPoint};
use warehouse_planner::traits::{ClusteringProvider, DistanceProvider};
use warehouse_planner::{PlannerError, PlannerResult};

/// Candidate sites on a coarse grid, indexed 0..=5.
pub const GRID_SITES: &[CandidateSite] = &[
    CandidateSite::new("origin", 0.0, 0.0),
    CandidateSite::new("north", 1.0, 0.0),
    CandidateSite::new("east", 0.0, 1.0),
    CandidateSite::new("north-east", 1.0, 1.0),
    CandidateSite::new("far", 10.0, 10.0),
    CandidateSite::new("remote", -10.0, -10.0),
];

pub fn point(id: usize, lat: f64, lon: f64) -> DeliveryPoint {
    DeliveryPoint::new(id, format!("p{id}"), lat, lon)
}

pub fn facility(id: usize, lat: f64, lon: f64) -> Facility {
    Facility::on_site(id, &CandidateSite::new("test site", lat, lon))
}

/// Two tight groups: four points near the origin, three near (10, 10).
pub fn two_town_points() -> Vec<DeliveryPoint> {
    vec![
        point(0, 0.0, 0.0),
        point(1, 0.1, 0.0),
        point(2, 0.0, 0.1),
        point(3, 0.1, 0.1),
        point(4, 10.0, 10.0),
        point(5, 10.1, 10.0),
        point(6, 10.0, 10.1),
    ]
}

/// Euclidean distance in degree space.
pub struct PlanarDistance;

impl DistanceProvider for PlanarDistance {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        ((from.lat - to.lat).powi(2) + (from.lon - to.lon).powi(2)).sqrt()
    }
}

/// Clustering stand-in that always fails.
pub struct BrokenClustering;

impl ClusteringProvider for BrokenClustering {
    fn centroids(&self, _points: &[GeoPoint], _k: usize, _seed: u64) -> PlannerResult<Vec<GeoPoint>> {
        Err(PlannerError::Clustering("backend unavailable".to_string()))
    }
}
