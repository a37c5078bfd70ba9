// Topic suggestions — curated catalog ranking and TF-IDF keywords.

pub mod catalog;
pub mod tfidf;
pub mod traits;
pub mod trending;
