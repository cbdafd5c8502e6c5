//! Assignment engine tests
//!
//! Partition, nearest-correctness, idempotence and distance bookkeeping.

mod fixtures;

use std::collections::HashSet;

use fixtures::*;
use warehouse_planner::PlannerError;
use warehouse_planner::assignment::assign;
use warehouse_planner::catalog::{CANDIDATE_SITES, delivery_points};
use warehouse_planner::haversine::Haversine;
use warehouse_planner::model::Facility;
use warehouse_planner::placement::place_selected;
use warehouse_planner::traits::DistanceProvider;

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_three_points_two_facilities() {
    let points = vec![point(0, 0.0, 0.0), point(1, 0.0, 1.0), point(2, 10.0, 10.0)];
    let facilities = vec![facility(0, 0.0, 0.0), facility(1, 10.0, 10.0)];

    let assignment = assign(&facilities, &points, &Haversine::default()).unwrap();

    assert_eq!(assignment.facility_of(0), Some(0));
    assert_eq!(assignment.facility_of(1), Some(0), "(0,1) is closer to (0,0) than (10,10)");
    assert_eq!(assignment.facility_of(2), Some(1));

    let total = assignment.total_distance_km();
    assert!((total - 111.2).abs() < 0.1, "expected ~111.2km, got {}", total);
}

#[test]
fn test_equal_distance_goes_to_lower_id() {
    let points = vec![point(0, 0.0, 0.0)];
    let facilities = vec![facility(0, 1.0, 0.0), facility(1, -1.0, 0.0)];

    let assignment = assign(&facilities, &points, &Haversine::default()).unwrap();

    assert_eq!(assignment.facility_of(0), Some(0));
}

#[test]
fn test_zero_facilities_leaves_nothing() {
    let result = assign(&[], &two_town_points(), &Haversine::default());
    assert!(matches!(result, Err(PlannerError::NoFacilities)));
}

#[test]
fn test_zero_points_average_is_zero() {
    let metrics = assign(&[facility(0, 0.0, 0.0)], &[], &Haversine::default())
        .unwrap()
        .into_metrics();
    assert_eq!(metrics.total_distance_km, 0.0);
    assert_eq!(metrics.average_distance_km, 0.0);
}

// ============================================================================
// Partition & Consistency
// ============================================================================

fn catalog_facilities() -> Vec<Facility> {
    place_selected(&delivery_points(), CANDIDATE_SITES, &[1, 9, 0, 15, 8]).unwrap()
}

#[test]
fn test_every_point_in_exactly_one_load() {
    let points = delivery_points();
    let assignment = assign(&catalog_facilities(), &points, &Haversine::default()).unwrap();

    let mut seen = HashSet::new();
    for load in assignment.loads() {
        for delivery in &load.deliveries {
            assert!(seen.insert(delivery.point_id), "point {} assigned twice", delivery.point_id);
            assert_eq!(assignment.facility_of(delivery.point_id), Some(load.facility.id));
        }
    }
    let expected: HashSet<usize> = points.iter().map(|p| p.id).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_assigned_facility_is_nearest() {
    let points = delivery_points();
    let facilities = catalog_facilities();
    let distance = Haversine::default();
    let assignment = assign(&facilities, &points, &distance).unwrap();

    for point in &points {
        let chosen = assignment.facility_of(point.id).unwrap();
        let chosen_km = distance.distance_km(facilities[chosen].location, point.location);
        for other in &facilities {
            let other_km = distance.distance_km(other.location, point.location);
            assert!(chosen_km <= other_km, "{} should not prefer {}", point.name, other.display_name());
            if other_km == chosen_km {
                assert!(chosen <= other.id, "ties must go to the lower id");
            }
        }
    }
}

#[test]
fn test_total_matches_independent_recomputation() {
    let points = delivery_points();
    let facilities = catalog_facilities();
    let distance = Haversine::default();
    let assignment = assign(&facilities, &points, &distance).unwrap();

    let recomputed: f64 = points
        .iter()
        .map(|p| {
            let f = assignment.facility_of(p.id).unwrap();
            distance.distance_km(facilities[f].location, p.location)
        })
        .sum();

    assert!((assignment.total_distance_km() - recomputed).abs() < 1e-9);
    assert!(
        (assignment.average_distance_km() - recomputed / points.len() as f64).abs() < 1e-9
    );
}

#[test]
fn test_rerun_is_identical() {
    let points = delivery_points();
    let facilities = catalog_facilities();

    let first = assign(&facilities, &points, &Haversine::default()).unwrap();
    let second = assign(&facilities, &points, &Haversine::default()).unwrap();

    assert_eq!(first.loads(), second.loads());
    assert_eq!(first.total_distance_km(), second.total_distance_km());
    for point in &points {
        assert_eq!(first.facility_of(point.id), second.facility_of(point.id));
    }
}

#[test]
fn test_delivery_order_follows_input_order() {
    let points = two_town_points();
    let facilities = vec![facility(0, 0.0, 0.0), facility(1, 10.0, 10.0)];

    let assignment = assign(&facilities, &points, &PlanarDistance).unwrap();

    let ids: Vec<usize> = assignment.loads()[0].deliveries.iter().map(|d| d.point_id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    let ids: Vec<usize> = assignment.loads()[1].deliveries.iter().map(|d| d.point_id).collect();
    assert_eq!(ids, vec![4, 5, 6]);
}
