// MapView — the complete payload for a map renderer: which mode we're in,
// the points to draw, and where to center.

use serde::Serialize;

use super::points::{centroid, compose, hotspot_mode, MapPoint};
use crate::events::message::ChatroomSummary;
use crate::geo::Coordinate;
use crate::hotspots::models::HotspotRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MapMode {
    Chatrooms,
    Hotspots,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub mode: MapMode,
    /// The active search term, if any
    pub term: Option<String>,
    pub points: Vec<MapPoint>,
    pub center: Coordinate,
}

impl MapView {
    /// Compose points for the given inputs and center the map on them.
    pub fn build(
        term: Option<&str>,
        chatrooms: &[ChatroomSummary],
        hotspots: &[HotspotRecord],
    ) -> Self {
        let mode = if hotspot_mode(term, hotspots) {
            MapMode::Hotspots
        } else {
            MapMode::Chatrooms
        };
        let points = compose(term, chatrooms, hotspots);
        let center = centroid(&points);

        Self {
            mode,
            term: term
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from),
            points,
            center,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
