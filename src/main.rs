use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use geotopic::config::Config;
use geotopic::events::chatrooms::chatrooms_from_messages;
use geotopic::events::load::load_messages;
use geotopic::events::message::Message;
use geotopic::geo::geohash;
use geotopic::hotspots::aggregate::aggregate;
use geotopic::map::view::MapView;
use geotopic::output::terminal;
use geotopic::topics::catalog::{category_topics, TOPIC_CATEGORIES};
use geotopic::topics::tfidf::TfIdfSuggester;
use geotopic::topics::traits::TopicSuggester;
use geotopic::topics::trending::CatalogSuggester;

/// geotopic: find where a topic is being discussed in geotagged chat.
///
/// Reads exported chat events (JSON array or JSON lines), decodes their
/// geohash tags and ranks locations by how often a term is mentioned.
#[derive(Parser)]
#[command(name = "geotopic", version, about)]
struct Cli {
    /// Event file to read (overrides GEOTOPIC_EVENTS_PATH)
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a geohash to its center coordinate
    Decode {
        /// The geohash (e.g. u4pruydqqvj)
        geohash: String,
    },

    /// Rank locations by mentions of a term
    Search {
        /// Word or phrase to search for (matched literally, any case)
        term: String,

        /// Max mentions to list (default: GEOTOPIC_MENTION_LIMIT or 20)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show map points: chatrooms, or hotspots when a term is given
    Map {
        /// Search term; without it every chatroom is shown
        #[arg(long)]
        term: Option<String>,

        /// Print the map view as JSON for a renderer
        #[arg(long)]
        json: bool,
    },

    /// List chatrooms (one per geohash), busiest first
    Rooms,

    /// Suggest topics worth searching for
    Topics {
        /// Use TF-IDF keywords instead of the curated topic catalog
        #[arg(long)]
        tfidf: bool,

        /// Only rank topics from this catalog category (e.g. "Social")
        #[arg(long, conflicts_with = "tfidf")]
        category: Option<String>,

        /// Number of suggestions (default: GEOTOPIC_SUGGESTION_COUNT or 10)
        #[arg(long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("geotopic=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = cli.events {
        config.events_path = path;
    }

    match cli.command {
        Commands::Decode { geohash: code } => {
            let cell = geohash::decode_cell(code.trim())?;
            terminal::display_decoded(code.trim(), &cell);
        }

        Commands::Search { term, limit } => {
            if term.trim().is_empty() {
                anyhow::bail!("Search term is empty. Enter a word or phrase, e.g. `geotopic search bitcoin`.");
            }
            let messages = read_messages(&config)?;
            let search = aggregate(&messages, &term);
            terminal::display_search(&search, limit.unwrap_or(config.mention_limit));
        }

        Commands::Map { term, json } => {
            let messages = read_messages(&config)?;
            let chatrooms = chatrooms_from_messages(&messages);
            let search = aggregate(&messages, term.as_deref().unwrap_or_default());
            let view = MapView::build(term.as_deref(), &chatrooms, &search.hotspots);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                terminal::display_map(&view);
            }
        }

        Commands::Rooms => {
            let messages = read_messages(&config)?;
            terminal::display_rooms(&chatrooms_from_messages(&messages));
        }

        Commands::Topics {
            tfidf,
            category,
            count,
        } => {
            let messages = read_messages(&config)?;
            let texts: Vec<String> = messages.iter().map(|m| m.content.clone()).collect();
            let limit = count.unwrap_or(config.suggestion_count);

            if tfidf {
                let suggester = TfIdfSuggester {
                    top_n_keywords: limit,
                };
                let suggestions = suggester.suggest(&texts)?;
                terminal::display_suggestions("TF-IDF Keywords", &suggestions);
            } else {
                let mut suggester = CatalogSuggester {
                    limit,
                    ..CatalogSuggester::default()
                };
                let heading = match category.as_deref() {
                    Some(name) => {
                        let Some(topics) = category_topics(name) else {
                            let known: Vec<&str> =
                                TOPIC_CATEGORIES.iter().map(|(c, _)| *c).collect();
                            anyhow::bail!(
                                "Unknown topic category {name:?}. Known categories: {}",
                                known.join(", ")
                            );
                        };
                        suggester.topics = topics.iter().map(|t| t.to_string()).collect();
                        format!("Trending in {name}")
                    }
                    None => "Trending Topics".to_string(),
                };
                let suggestions = suggester.suggest(&texts)?;
                terminal::display_suggestions(&heading, &suggestions);
            }

            println!(
                "\n{}",
                "Search any of these with: geotopic search <topic>".dimmed()
            );
        }
    }

    Ok(())
}

fn read_messages(config: &Config) -> Result<Vec<Message>> {
    config.require_events_file()?;
    let messages = load_messages(&config.events_path)?;
    info!(
        tagged = messages.iter().filter(|m| m.geohash().is_some()).count(),
        total = messages.len(),
        "Events ready"
    );
    Ok(messages)
}
