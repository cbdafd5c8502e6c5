//! Nearest-facility assignment engine.
//!
//! Every delivery point is served by the facility closest to it. The engine
//! does O(N·K) distance evaluations, which is nothing at the sizes this
//! planner handles (tens of points, single-digit facilities).

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{PlannerError, PlannerResult};
use crate::model::{AssignedDelivery, DeliveryPoint, Facility, FacilityLoad, OptimizationMetrics};
use crate::traits::DistanceProvider;

/// Result of one assignment run.
///
/// Holds both directions of the partition: per-facility loads and a
/// point-to-facility lookup. They are built from the same pass and always
/// agree. Nothing here outlives the run; a new call yields a new value.
#[derive(Debug, Clone)]
pub struct Assignment {
    loads: Vec<FacilityLoad>,
    facility_of: HashMap<usize, usize>,
    delivery_point_count: usize,
}

impl Assignment {
    pub fn loads(&self) -> &[FacilityLoad] {
        &self.loads
    }

    /// Facility id serving the given delivery point.
    pub fn facility_of(&self, point_id: usize) -> Option<usize> {
        self.facility_of.get(&point_id).copied()
    }

    pub fn delivery_point_count(&self) -> usize {
        self.delivery_point_count
    }

    /// Sum of facility-to-point distances over every assigned pair.
    pub fn total_distance_km(&self) -> f64 {
        self.loads.iter().map(FacilityLoad::total_distance_km).sum()
    }

    /// Total distance per delivery point, or 0 with no points.
    pub fn average_distance_km(&self) -> f64 {
        if self.delivery_point_count == 0 {
            return 0.0;
        }
        self.total_distance_km() / self.delivery_point_count as f64
    }

    pub fn into_metrics(self) -> OptimizationMetrics {
        let total_distance_km = self.total_distance_km();
        let average_distance_km = self.average_distance_km();
        let active_facility_count = self.loads.iter().filter(|l| !l.deliveries.is_empty()).count();

        OptimizationMetrics {
            facility_count: self.loads.len(),
            active_facility_count,
            delivery_point_count: self.delivery_point_count,
            total_distance_km,
            average_distance_km,
            facilities: self.loads,
        }
    }
}

/// Assigns every delivery point to its nearest facility.
///
/// Facilities are scanned in slice order and only a strictly shorter distance
/// replaces the current pick, so on a tie the earlier facility (lower id)
/// keeps the point. Fails with [`PlannerError::NoFacilities`] before doing any
/// work when `facilities` is empty. An empty `points` slice is fine and
/// yields empty loads.
pub fn assign<D: DistanceProvider>(
    facilities: &[Facility],
    points: &[DeliveryPoint],
    distance: &D,
) -> PlannerResult<Assignment> {
    if facilities.is_empty() {
        return Err(PlannerError::NoFacilities);
    }

    let mut loads: Vec<FacilityLoad> = facilities.iter().cloned().map(FacilityLoad::new).collect();
    let mut facility_of = HashMap::with_capacity(points.len());

    for point in points {
        let (slot, distance_km) = nearest_facility(point, facilities, distance);
        let load = &mut loads[slot];
        load.deliveries.push(AssignedDelivery {
            point_id: point.id,
            name: point.name.clone(),
            location: point.location,
            distance_km,
        });
        facility_of.insert(point.id, load.facility.id);
    }

    for load in &loads {
        debug!(
            facility = %load.facility.display_name(),
            deliveries = load.delivery_count(),
            "deliveries assigned"
        );
    }

    let assignment = Assignment {
        loads,
        facility_of,
        delivery_point_count: points.len(),
    };
    info!(
        facilities = facilities.len(),
        points = points.len(),
        total_km = assignment.total_distance_km(),
        "assignment complete"
    );

    Ok(assignment)
}

/// Position in `facilities` of the closest facility, with its distance.
fn nearest_facility<D: DistanceProvider>(
    point: &DeliveryPoint,
    facilities: &[Facility],
    distance: &D,
) -> (usize, f64) {
    let mut best_slot = 0;
    let mut best_km = f64::INFINITY;
    for (slot, facility) in facilities.iter().enumerate() {
        let km = distance.distance_km(facility.location, point.location);
        if km < best_km {
            best_slot = slot;
            best_km = km;
        }
    }
    (best_slot, best_km)
}
