// Geographic primitives — coordinates and the geohash decoder.

pub mod geohash;

use serde::{Deserialize, Serialize};

/// A point estimate on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in [-90, 90]
    pub lat: f64,
    /// Longitude in [-180, 180]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
