// Hotspot aggregation — turns a flat message list into ranked, geolocated
// mention statistics for one search term.
//
// Matching is case-insensitive and literal: the term is never interpreted as
// a pattern, so "a.b" only ever matches the three characters "a.b".
//
// Grouping keeps first-seen order so that the stable sorts at the end break
// ties by encounter order rather than by hash order.

use std::collections::HashMap;

use tracing::{debug, info};

use super::models::{HotspotRecord, MentionRecord, TopicSearch};
use crate::events::message::Message;
use crate::geo::geohash;

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Both sides must already be case-folded. An empty needle counts as zero.
pub fn count_mentions(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Search `messages` for `term` and rank the locations that mention it.
///
/// A blank term or an empty message list is a no-op returning an empty
/// result. Surrounding whitespace in the term is ignored.
pub fn aggregate<'a>(messages: &'a [Message], term: &str) -> TopicSearch<'a> {
    let term = term.trim();
    if term.is_empty() || messages.is_empty() {
        return TopicSearch {
            term: term.to_string(),
            ..TopicSearch::default()
        };
    }

    let needle = term.to_lowercase();
    let mut mentions: Vec<MentionRecord<'a>> = Vec::new();

    for message in messages {
        // Untagged messages can't be placed on the map.
        let Some(geohash) = message.geohash() else {
            continue;
        };
        let mention_count = count_mentions(&message.content.to_lowercase(), &needle);
        if mention_count == 0 {
            continue;
        }
        mentions.push(MentionRecord {
            message,
            geohash,
            mention_count,
            timestamp: message.created_at,
        });
    }

    let hotspots = group_hotspots(&mentions);

    // Stable: equal timestamps keep message order.
    mentions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    info!(
        term,
        messages = messages.len(),
        mentions = mentions.len(),
        hotspots = hotspots.len(),
        "Aggregated topic hotspots"
    );

    TopicSearch {
        term: term.to_string(),
        mentions,
        hotspots,
    }
}

/// Sum mentions per geohash, decode each geohash once, and rank by mentions.
///
/// Geohashes are grouped case-insensitively; hotspots carry the lowercase
/// spelling.
fn group_hotspots(mentions: &[MentionRecord<'_>]) -> Vec<HotspotRecord> {
    // (geohash, mentions, messages) in first-seen order
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, usize, usize)> = Vec::new();

    for mention in mentions {
        let code = geohash::normalize(mention.geohash);
        match index.get(&code) {
            Some(&i) => {
                groups[i].1 += mention.mention_count;
                groups[i].2 += 1;
            }
            None => {
                index.insert(code.clone(), groups.len());
                groups.push((code, mention.mention_count, 1));
            }
        }
    }

    let mut hotspots: Vec<HotspotRecord> = groups
        .into_iter()
        .filter_map(|(code, mention_count, total_messages)| {
            match geohash::decode(&code) {
                Ok(coordinate) => Some(HotspotRecord {
                    geohash: code,
                    coordinate,
                    mention_count,
                    total_messages,
                }),
                Err(e) => {
                    debug!(geohash = %code, error = %e, "Dropping hotspot with undecodable geohash");
                    None
                }
            }
        })
        .collect();

    hotspots.sort_by(|a, b| b.mention_count.cmp(&a.mention_count));
    hotspots
}
