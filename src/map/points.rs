// MapPoint — the one shape a renderer needs to place a marker.
//
// A point is either a plain chatroom (magnitude = message count) or a topic
// hotspot (magnitude = mention count, plus how many messages matched). The
// two are separate variants so hotspot-only data can't be read off a
// chatroom point by accident.

use serde::Serialize;
use tracing::debug;

use crate::events::message::ChatroomSummary;
use crate::geo::{geohash, Coordinate};
use crate::hotspots::models::HotspotRecord;

/// A chatroom marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatroomPoint {
    pub geohash: String,
    pub label: String,
    pub message_count: u64,
    pub coordinate: Coordinate,
}

/// A topic hotspot marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotPoint {
    pub geohash: String,
    pub label: String,
    pub mention_count: usize,
    pub total_messages: usize,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MapPoint {
    Chatroom(ChatroomPoint),
    Hotspot(HotspotPoint),
}

impl MapPoint {
    pub fn geohash(&self) -> &str {
        match self {
            MapPoint::Chatroom(p) => &p.geohash,
            MapPoint::Hotspot(p) => &p.geohash,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MapPoint::Chatroom(p) => &p.label,
            MapPoint::Hotspot(p) => &p.label,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            MapPoint::Chatroom(p) => p.coordinate,
            MapPoint::Hotspot(p) => p.coordinate,
        }
    }

    /// The number shown on the marker: messages for a chatroom, mentions
    /// for a hotspot.
    pub fn magnitude(&self) -> u64 {
        match self {
            MapPoint::Chatroom(p) => p.message_count,
            MapPoint::Hotspot(p) => p.mention_count as u64,
        }
    }

    pub fn is_hotspot(&self) -> bool {
        matches!(self, MapPoint::Hotspot(_))
    }
}

/// Build chatroom points, dropping rooms whose geohash doesn't decode.
pub fn compose_chatrooms(chatrooms: &[ChatroomSummary]) -> Vec<MapPoint> {
    chatrooms
        .iter()
        .filter_map(|room| match geohash::decode(&room.geohash) {
            Ok(coordinate) => Some(MapPoint::Chatroom(ChatroomPoint {
                geohash: room.geohash.clone(),
                label: room.name.clone(),
                message_count: room.message_count,
                coordinate,
            })),
            Err(e) => {
                debug!(geohash = %room.geohash, error = %e, "Skipping chatroom point");
                None
            }
        })
        .collect()
}

/// Build hotspot points. Hotspots are already decoded, so nothing is dropped.
pub fn compose_hotspots(hotspots: &[HotspotRecord]) -> Vec<MapPoint> {
    hotspots
        .iter()
        .map(|h| {
            MapPoint::Hotspot(HotspotPoint {
                geohash: h.geohash.clone(),
                label: format!("#{}", h.geohash),
                mention_count: h.mention_count,
                total_messages: h.total_messages,
                coordinate: h.coordinate,
            })
        })
        .collect()
}

/// Whether a search is active and found something to show.
pub fn hotspot_mode(term: Option<&str>, hotspots: &[HotspotRecord]) -> bool {
    term.is_some_and(|t| !t.trim().is_empty()) && !hotspots.is_empty()
}

/// Pick the point set to show: hotspots when a search term is active and
/// produced hotspots, chatrooms otherwise.
pub fn compose(
    term: Option<&str>,
    chatrooms: &[ChatroomSummary],
    hotspots: &[HotspotRecord],
) -> Vec<MapPoint> {
    if hotspot_mode(term, hotspots) {
        compose_hotspots(hotspots)
    } else {
        compose_chatrooms(chatrooms)
    }
}

/// Mean latitude and longitude of the points; (0, 0) when there are none.
pub fn centroid(points: &[MapPoint]) -> Coordinate {
    if points.is_empty() {
        return Coordinate::default();
    }
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points.iter().fold((0.0, 0.0), |(lat, lng), p| {
        let c = p.coordinate();
        (lat + c.lat, lng + c.lng)
    });
    Coordinate::new(lat_sum / n, lng_sum / n)
}
