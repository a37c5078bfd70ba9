// Curated topics people commonly discuss in geochat rooms, used as search
// suggestions.

/// Flat list of common topics. Multi-word entries are searched as phrases.
pub const COMMON_TOPICS: &[&str] = &[
    // Cryptocurrency & Finance
    "bitcoin", "btc", "sats", "lightning", "hodl", "mining", "wallet",
    "defi", "nft", "altcoin", "trading", "price", "bull", "bear", "moon", "dip", "pump",
    // Nostr & Decentralization
    "nostr", "relay", "zap", "npub", "nsec", "client", "damus", "iris", "amethyst", "primal",
    "decentralized", "censorship", "freedom", "protocol", "open source", "self custody",
    // Technology
    "ai", "chatgpt", "machine learning", "blockchain", "web3", "privacy", "security", "encryption",
    "linux", "bitcoin core", "node", "developer", "coding", "programming", "github",
    // Culture & Lifestyle
    "coffee", "beer", "wine", "food", "music", "art", "books", "movies", "gaming", "sports",
    "travel", "photography", "nature", "fitness", "health", "meditation", "philosophy",
    // News & Events
    "news", "politics", "election", "government", "inflation", "economy", "war", "peace",
    "climate", "energy", "solar", "nuclear", "environment", "sustainability",
    // Social & Communication
    "gm", "gn", "pv", "hello", "thanks", "love", "family", "friends", "community", "meetup",
    "conference", "event", "party", "celebration", "birthday", "wedding",
    // Memes & Internet Culture
    "meme", "lol", "lmao", "based", "cringe", "cope", "seethe", "ngmi", "wagmi", "diamond hands",
    "paper hands", "wen", "ser", "fren", "anon", "chad", "karen", "boomer", "zoomer",
    // Places & Geography
    "usa", "america", "europe", "asia", "africa", "australia", "canada", "mexico", "japan",
    "germany", "france", "uk", "china", "india", "brazil", "russia", "bitcoin city",
    // Weather & Time
    "weather", "rain", "snow", "sun", "storm", "hot", "cold", "winter", "summer", "spring", "fall",
    "morning", "evening", "night", "weekend", "monday", "friday",
    // Emotions & Reactions
    "happy", "sad", "angry", "excited", "tired", "stressed", "relaxed", "confused", "surprised",
    "grateful", "proud", "disappointed", "hopeful", "worried", "calm",
];

/// A smaller, grouped set of topics for quick-pick menus.
pub const TOPIC_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Crypto & Finance",
        &["bitcoin", "ethereum", "crypto", "lightning", "trading", "hodl", "sats", "defi"],
    ),
    (
        "Nostr & Tech",
        &["nostr", "relay", "zap", "damus", "decentralized", "privacy", "open source"],
    ),
    (
        "Culture & Life",
        &["coffee", "music", "art", "travel", "food", "gaming", "books", "fitness"],
    ),
    (
        "Social",
        &["gm", "gn", "hello", "thanks", "community", "friends", "meetup", "party"],
    ),
    (
        "Trending",
        &["ai", "chatgpt", "meme", "based", "wagmi", "diamond hands", "wen", "ser"],
    ),
];

/// Topics in a named category, matched case-insensitively.
pub fn category_topics(name: &str) -> Option<&'static [&'static str]> {
    TOPIC_CATEGORIES
        .iter()
        .find(|(category, _)| category.eq_ignore_ascii_case(name))
        .map(|(_, topics)| *topics)
}
