// Marker sizing — maps a point's magnitude to a bounded on-screen size.
//
// Sizes are clamped so a room with ten thousand messages draws no bigger than
// one with a hundred, and a single message still gets a clickable marker.

use super::points::MapPoint;

/// Chatroom marker size bounds, in pixels.
pub const CHATROOM_MIN_SIZE: f64 = 20.0;
pub const CHATROOM_MAX_SIZE: f64 = 40.0;

/// Hotspot marker size bounds, in pixels.
pub const HOTSPOT_MIN_SIZE: f64 = 25.0;
pub const HOTSPOT_MAX_SIZE: f64 = 50.0;

/// Smallest font for the number drawn inside a marker.
pub const MIN_LABEL_FONT_SIZE: f64 = 10.0;

/// `20 + messages / 5`, clamped to [20, 40].
pub fn chatroom_marker_size(message_count: u64) -> f64 {
    (CHATROOM_MIN_SIZE + message_count as f64 / 5.0).clamp(CHATROOM_MIN_SIZE, CHATROOM_MAX_SIZE)
}

/// `25 + mentions * 2`, clamped to [25, 50].
pub fn hotspot_marker_size(mention_count: usize) -> f64 {
    (HOTSPOT_MIN_SIZE + mention_count as f64 * 2.0).clamp(HOTSPOT_MIN_SIZE, HOTSPOT_MAX_SIZE)
}

/// Marker size for any point.
pub fn marker_size(point: &MapPoint) -> f64 {
    match point {
        MapPoint::Chatroom(p) => chatroom_marker_size(p.message_count),
        MapPoint::Hotspot(p) => hotspot_marker_size(p.mention_count),
    }
}

/// Font size for the marker's number: a third of the marker, at least 10.
pub fn label_font_size(marker_size: f64) -> f64 {
    (marker_size / 3.0).max(MIN_LABEL_FONT_SIZE)
}
