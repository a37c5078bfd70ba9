// Chatroom grouping — one chatroom per geohash seen in the event stream.

use std::collections::HashMap;

use tracing::debug;

use super::message::{ChatroomSummary, Message};
use crate::geo::geohash;

/// Summarize tagged messages into chatrooms, busiest first.
///
/// Rooms are keyed by lowercase geohash and named `#<geohash>`. Messages
/// without a geohash are skipped, and so are rooms whose geohash cannot be
/// decoded. Rooms with equal counts keep the order in which they were first
/// seen.
pub fn chatrooms_from_messages(messages: &[Message]) -> Vec<ChatroomSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rooms: Vec<ChatroomSummary> = Vec::new();

    for message in messages {
        let Some(tag) = message.geohash() else {
            continue;
        };
        let code = geohash::normalize(tag);
        match index.get(&code) {
            Some(&i) => rooms[i].message_count += 1,
            None => {
                index.insert(code.clone(), rooms.len());
                rooms.push(ChatroomSummary {
                    name: format!("#{code}"),
                    geohash: code,
                    message_count: 1,
                });
            }
        }
    }

    rooms.retain(|room| match geohash::decode(&room.geohash) {
        Ok(_) => true,
        Err(e) => {
            debug!(geohash = %room.geohash, error = %e, "Skipping chatroom with undecodable geohash");
            false
        }
    });
    rooms.sort_by(|a, b| b.message_count.cmp(&a.message_count));
    rooms
}

/// Messages posted from this geohash (any letter case), in their original
/// order.
pub fn messages_at<'a>(messages: &'a [Message], geohash: &str) -> Vec<&'a Message> {
    messages
        .iter()
        .filter(|m| m.geohash().is_some_and(|g| g.eq_ignore_ascii_case(geohash)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: &str, geohash: &str) -> Message {
        Message {
            id: id.to_string(),
            pubkey: "pk".to_string(),
            created_at: 0,
            content: String::new(),
            tags: vec![vec!["g".to_string(), geohash.to_string()]],
        }
    }

    #[test]
    fn test_rooms_counted_and_ranked() {
        let messages = vec![
            tagged("1", "u4pruy"),
            tagged("2", "dr5r"),
            tagged("3", "dr5r"),
            tagged("4", "9q8y"),
        ];
        let rooms = chatrooms_from_messages(&messages);
        let order: Vec<&str> = rooms.iter().map(|r| r.geohash.as_str()).collect();
        assert_eq!(order, vec!["dr5r", "u4pruy", "9q8y"]);
        assert_eq!(rooms[0].message_count, 2);
        assert_eq!(rooms[0].name, "#dr5r");
    }

    #[test]
    fn test_undecodable_room_dropped() {
        let messages = vec![tagged("1", "hello!"), tagged("2", "dr5r")];
        let rooms = chatrooms_from_messages(&messages);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].geohash, "dr5r");
    }

    #[test]
    fn test_mixed_case_tags_share_a_room() {
        let messages = vec![tagged("1", "u4pruy"), tagged("2", "U4PRUY"), tagged("3", "u4PrUy")];
        let rooms = chatrooms_from_messages(&messages);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].geohash, "u4pruy");
        assert_eq!(rooms[0].name, "#u4pruy");
        assert_eq!(rooms[0].message_count, 3);
        assert_eq!(messages_at(&messages, "U4pruy").len(), 3);
    }

    #[test]
    fn test_messages_at_filters_exact_geohash() {
        let messages = vec![tagged("1", "dr5r"), tagged("2", "dr5ru"), tagged("3", "dr5r")];
        let ids: Vec<&str> = messages_at(&messages, "dr5r")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
