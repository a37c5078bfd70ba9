// Unit tests for topic suggestions.
//
// Tests the catalog suggester's ranking against search semantics, category
// lookup, and TF-IDF suggester invariants.

use geotopic::topics::catalog::{category_topics, COMMON_TOPICS, TOPIC_CATEGORIES};
use geotopic::topics::tfidf::TfIdfSuggester;
use geotopic::topics::traits::TopicSuggester;
use geotopic::topics::trending::CatalogSuggester;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Catalog
// ============================================================

#[test]
fn catalog_has_no_duplicates() {
    let mut seen = std::collections::HashSet::new();
    for topic in COMMON_TOPICS {
        assert!(seen.insert(*topic), "duplicate topic {topic}");
    }
}

#[test]
fn every_category_resolves() {
    for (name, topics) in TOPIC_CATEGORIES {
        assert_eq!(category_topics(name), Some(*topics));
        assert_eq!(category_topics(&name.to_uppercase()), Some(*topics));
    }
}

// ============================================================
// CatalogSuggester
// ============================================================

#[test]
fn catalog_suggester_empty_input_is_empty() {
    let suggester = CatalogSuggester::default();
    assert!(suggester.suggest(&[]).unwrap().is_empty());
}

#[test]
fn catalog_suggester_phrases_match() {
    let suggester = CatalogSuggester {
        topics: texts(&["diamond hands", "paper hands"]),
        limit: 5,
    };
    let ranked = suggester
        .suggest(&texts(&["Diamond hands forever", "diamond hands, no paper hands"]))
        .unwrap();
    assert_eq!(ranked[0].topic, "diamond hands");
    assert_eq!(ranked[0].score, 2.0);
    assert_eq!(ranked[1].topic, "paper hands");
    assert_eq!(ranked[1].score, 1.0);
}

#[test]
fn catalog_suggester_ties_keep_catalog_order() {
    let suggester = CatalogSuggester {
        topics: texts(&["rain", "snow", "storm"]),
        limit: 5,
    };
    let ranked = suggester.suggest(&texts(&["storm snow rain"])).unwrap();
    let order: Vec<&str> = ranked.iter().map(|s| s.topic.as_str()).collect();
    assert_eq!(order, vec!["rain", "snow", "storm"]);
}

#[test]
fn catalog_suggester_zero_limit() {
    let suggester = CatalogSuggester {
        limit: 0,
        ..CatalogSuggester::default()
    };
    assert!(suggester.suggest(&texts(&["bitcoin"])).unwrap().is_empty());
}

// ============================================================
// TfIdfSuggester
// ============================================================

#[test]
fn tfidf_respects_top_n() {
    let suggester = TfIdfSuggester { top_n_keywords: 3 };
    let corpus = texts(&[
        "Lightning node routing fees dropped again this week",
        "Running a lightning node on a raspberry pi at home",
        "The farmers market accepts lightning payments now",
        "Heavy snow closed the mountain pass overnight",
        "Snow plows cleared the mountain roads by morning",
    ]);
    let suggestions = suggester.suggest(&corpus).unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 3);
    for s in &suggestions {
        assert!(s.score.is_finite());
        assert!(!s.topic.trim().is_empty());
    }
}

#[test]
fn tfidf_rejects_blank_corpus() {
    let suggester = TfIdfSuggester::default();
    assert!(suggester.suggest(&texts(&["", "  "])).is_err());
}
