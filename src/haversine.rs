//! Haversine distance provider.
//!
//! Uses great-circle distance on a spherical earth. Ignores roads and the
//! earth's flattening, which is fine for ranking city-scale placements.

use crate::model::GeoPoint;
use crate::traits::DistanceProvider;

/// Mean earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance provider.
#[derive(Debug, Clone)]
pub struct Haversine {
    /// Sphere radius in kilometers.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Central angle between two points in radians.
    fn central_angle(from: GeoPoint, to: GeoPoint) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lon = (to.lon - from.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

        // Rounding can push `a` a hair above 1 for antipodal points.
        2.0 * a.sqrt().min(1.0).asin()
    }
}

impl DistanceProvider for Haversine {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        self.radius_km * Self::central_angle(from, to)
    }
}
