// Topic suggester trait — swap-ready abstraction.
//
// Suggestions help someone pick a search term before running a hotspot
// search. The catalog suggester ranks a curated topic list by how often each
// topic is mentioned; the TF-IDF suggester finds distinctive words in the
// messages themselves.

use anyhow::Result;
use serde::Serialize;

/// A suggested search term with a relevance score (higher is better).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedTopic {
    pub topic: String,
    pub score: f64,
}

/// Trait for proposing search terms from a set of message texts.
pub trait TopicSuggester {
    /// Suggest topics, best first.
    fn suggest(&self, texts: &[String]) -> Result<Vec<SuggestedTopic>>;
}
