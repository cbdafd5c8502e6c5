//! warehouse-planner
//!
//! Places warehouses over a fixed set of delivery points, assigns each point
//! to its nearest warehouse and ranks placement strategies by the total
//! distance they leave to cover.

pub mod assignment;
pub mod catalog;
pub mod comparator;
pub mod config;
pub mod error;
pub mod haversine;
pub mod kmeans;
pub mod model;
pub mod placement;
pub mod report;
pub mod traits;

pub use error::{PlannerError, PlannerResult};
