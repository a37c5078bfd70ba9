// Search result types produced by the hotspot aggregator.

use serde::Serialize;

use crate::events::message::Message;
use crate::geo::Coordinate;

/// One message that mentions the search term.
#[derive(Debug, Clone, Serialize)]
pub struct MentionRecord<'a> {
    pub message: &'a Message,
    pub geohash: &'a str,
    /// Non-overlapping, case-insensitive occurrences of the term
    pub mention_count: usize,
    pub timestamp: i64,
}

/// A location where the term was mentioned, with its totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotRecord {
    pub geohash: String,
    pub coordinate: Coordinate,
    /// Sum of mention counts over every matching message at this geohash
    pub mention_count: usize,
    /// Number of matching messages at this geohash
    pub total_messages: usize,
}

/// Everything one search produces.
///
/// `mentions` are newest first. `hotspots` are ranked by mention count and
/// only include geohashes that decode; mentions from undecodable geohashes
/// still appear in `mentions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopicSearch<'a> {
    pub term: String,
    pub mentions: Vec<MentionRecord<'a>>,
    pub hotspots: Vec<HotspotRecord>,
}

impl TopicSearch<'_> {
    /// Total mentions across all hotspots.
    pub fn total_mentions(&self) -> usize {
        self.hotspots.iter().map(|h| h.mention_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty() && self.hotspots.is_empty()
    }
}
