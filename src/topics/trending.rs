// Catalog-based suggestions — which curated topics are actually being
// mentioned, ranked by mention count.
//
// Counting uses the same literal, case-insensitive matching as hotspot
// search, so a suggested topic's score is exactly the total a search for it
// would report (before any location filtering).

use anyhow::Result;
use tracing::debug;

use super::catalog::COMMON_TOPICS;
use super::traits::{SuggestedTopic, TopicSuggester};
use crate::hotspots::aggregate::count_mentions;

pub struct CatalogSuggester {
    /// Topics to rank; defaults to the common topic catalog
    pub topics: Vec<String>,
    /// Maximum number of suggestions returned
    pub limit: usize,
}

impl Default for CatalogSuggester {
    fn default() -> Self {
        Self {
            topics: COMMON_TOPICS.iter().map(|t| t.to_string()).collect(),
            limit: 10,
        }
    }
}

impl TopicSuggester for CatalogSuggester {
    fn suggest(&self, texts: &[String]) -> Result<Vec<SuggestedTopic>> {
        let folded: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();

        let mut ranked: Vec<SuggestedTopic> = self
            .topics
            .iter()
            .filter_map(|topic| {
                let needle = topic.trim().to_lowercase();
                let mentions: usize = folded.iter().map(|t| count_mentions(t, &needle)).sum();
                (mentions > 0).then(|| SuggestedTopic {
                    topic: topic.clone(),
                    score: mentions as f64,
                })
            })
            .collect();

        // Stable: ties keep catalog order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.limit);

        debug!(suggestions = ranked.len(), "Ranked catalog topics");
        Ok(ranked)
    }
}
