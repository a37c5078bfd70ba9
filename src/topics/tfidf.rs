// TF-IDF keyword suggestions.
//
// Uses the `keyword_extraction` crate over message contents, one message per
// document. Words every room says ("gm") get downweighted, words that are
// distinctive to some conversations get boosted, which makes them good
// candidates for a hotspot search.

use anyhow::Result;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::traits::{SuggestedTopic, TopicSuggester};

pub struct TfIdfSuggester {
    /// How many top keywords to return
    pub top_n_keywords: usize,
}

impl Default for TfIdfSuggester {
    fn default() -> Self {
        Self { top_n_keywords: 10 }
    }
}

impl TopicSuggester for TfIdfSuggester {
    fn suggest(&self, texts: &[String]) -> Result<Vec<SuggestedTopic>> {
        let documents: Vec<String> = texts
            .iter()
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .collect();

        if documents.is_empty() {
            anyhow::bail!("No message text to analyze — cannot suggest topics");
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);
        let params = TfIdfParams::UnprocessedDocuments(&documents, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.top_n_keywords);

        if let Some((top_keyword, top_score)) = ranked.first() {
            info!(
                keywords = ranked.len(),
                top_keyword = top_keyword.as_str(),
                top_score = *top_score,
                "Extracted TF-IDF keywords"
            );
        }

        Ok(ranked
            .into_iter()
            .map(|(topic, score)| SuggestedTopic {
                topic,
                score: f64::from(score),
            })
            .collect())
    }
}
