// Message — a geotagged chat event.
//
// Mirrors the Nostr event layout the chat relays emit. The engine only reads
// these: the location lives in the "g" tag, an optional nickname in "n".

use serde::{Deserialize, Serialize};

/// Tag key carrying the message's geohash.
pub const GEOHASH_TAG: &str = "g";
/// Tag key carrying the author's chosen nickname.
pub const NICKNAME_TAG: &str = "n";

/// A single chat message as delivered by the event source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Author identifier (public key, hex)
    pub pubkey: String,
    /// Unix timestamp in seconds
    pub created_at: i64,
    #[serde(default)]
    pub content: String,
    /// Structured tags, each `[key, value, ...]`
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
}

impl Message {
    /// Value of the first tag whose key matches, if it has one.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.first().is_some_and(|k| k == key))
            .and_then(|tag| tag.get(1))
            .map(String::as_str)
    }

    /// The geohash this message was posted from, if tagged.
    pub fn geohash(&self) -> Option<&str> {
        self.tag_value(GEOHASH_TAG).filter(|g| !g.is_empty())
    }

    pub fn nickname(&self) -> Option<&str> {
        self.tag_value(NICKNAME_TAG).filter(|n| !n.is_empty())
    }

    /// Name to show next to the message: the nickname when set, otherwise
    /// a shortened author key like `3bf0c63f…`.
    pub fn display_name(&self) -> String {
        match self.nickname() {
            Some(nick) => nick.to_string(),
            None => {
                let short: String = self.pubkey.chars().take(8).collect();
                format!("{short}…")
            }
        }
    }
}

/// A chatroom — all messages sharing one geohash — as summarized upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatroomSummary {
    pub geohash: String,
    pub name: String,
    pub message_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(tags: Vec<Vec<&str>>) -> Message {
        Message {
            id: "id".to_string(),
            pubkey: "3bf0c63fcb93463407af97a5e5ee64fa".to_string(),
            created_at: 0,
            content: String::new(),
            tags: tags
                .into_iter()
                .map(|t| t.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_tag_lookup_takes_first_match() {
        let m = msg(vec![vec!["g", "u4pruy"], vec!["g", "9q8yy"]]);
        assert_eq!(m.geohash(), Some("u4pruy"));
    }

    #[test]
    fn test_tag_without_value_is_absent() {
        let m = msg(vec![vec!["g"]]);
        assert_eq!(m.geohash(), None);
    }

    #[test]
    fn test_display_name_prefers_nickname() {
        let m = msg(vec![vec!["n", "satoshi"]]);
        assert_eq!(m.display_name(), "satoshi");
    }

    #[test]
    fn test_display_name_falls_back_to_short_key() {
        let m = msg(vec![]);
        assert_eq!(m.display_name(), "3bf0c63f…");
    }

    #[test]
    fn test_deserialize_nostr_event() {
        let json = r#"{
            "id": "abc",
            "pubkey": "def",
            "created_at": 1700000000,
            "kind": 20000,
            "content": "gm",
            "tags": [["g", "dr5r"], ["n", "alice"]],
            "sig": "00"
        }"#;
        let m: Message = serde_json::from_str(json).unwrap();
        assert_eq!(m.created_at, 1_700_000_000);
        assert_eq!(m.geohash(), Some("dr5r"));
        assert_eq!(m.nickname(), Some("alice"));
    }
}
