//! Planner data model: coordinates, delivery points, facilities and the
//! per-run metrics derived from an assignment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// A labeled location that must be served by exactly one facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPoint {
    pub id: usize,
    pub name: String,
    pub location: GeoPoint,
}

impl DeliveryPoint {
    pub fn new(id: usize, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            location: GeoPoint::new(lat, lon),
        }
    }
}

/// A pre-vetted location that may host a facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSite {
    pub name: &'static str,
    pub location: GeoPoint,
}

impl CandidateSite {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self {
            name,
            location: GeoPoint::new(lat, lon),
        }
    }
}

/// A placed warehouse. Ids are `0..K-1` in construction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: usize,
    /// Name of the candidate site the facility sits on.
    pub site: String,
    pub location: GeoPoint,
    /// Distance from the clustering centroid to the chosen site, when the
    /// facility was placed by snapping a centroid.
    pub snap_distance_km: Option<f64>,
}

impl Facility {
    pub fn on_site(id: usize, site: &CandidateSite) -> Self {
        Self {
            id,
            site: site.name.to_string(),
            location: site.location,
            snap_distance_km: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("Warehouse {} ({})", self.id, self.site)
    }
}

/// A delivery point as seen from the facility that serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedDelivery {
    pub point_id: usize,
    pub name: String,
    pub location: GeoPoint,
    pub distance_km: f64,
}

/// A facility together with the deliveries it serves in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityLoad {
    pub facility: Facility,
    pub deliveries: Vec<AssignedDelivery>,
}

impl FacilityLoad {
    pub fn new(facility: Facility) -> Self {
        Self {
            facility,
            deliveries: Vec::new(),
        }
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.deliveries.iter().map(|d| d.distance_km).sum()
    }
}

/// Aggregate figures for one strategy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationMetrics {
    pub facilities: Vec<FacilityLoad>,
    pub facility_count: usize,
    /// Facilities that ended up serving at least one delivery.
    pub active_facility_count: usize,
    pub delivery_point_count: usize,
    pub total_distance_km: f64,
    pub average_distance_km: f64,
}
