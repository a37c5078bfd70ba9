use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default location of the exported chat events.
pub const DEFAULT_EVENTS_PATH: &str = "./events.json";
/// Default number of mentions printed after a search.
pub const DEFAULT_MENTION_LIMIT: usize = 20;
/// Default number of topic suggestions.
pub const DEFAULT_SUGGESTION_COUNT: usize = 10;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command
/// line flags override anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON (array or lines) file of chat events (GEOTOPIC_EVENTS_PATH)
    pub events_path: PathBuf,
    /// How many mentions to print after a search (GEOTOPIC_MENTION_LIMIT)
    pub mention_limit: usize,
    /// How many topic suggestions to show (GEOTOPIC_SUGGESTION_COUNT)
    pub suggestion_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_path: PathBuf::from(DEFAULT_EVENTS_PATH),
            mention_limit: DEFAULT_MENTION_LIMIT,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only malformed numbers are an error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let events_path = lookup("GEOTOPIC_EVENTS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.events_path);

        Ok(Self {
            events_path,
            mention_limit: parse_count(&lookup, "GEOTOPIC_MENTION_LIMIT")?
                .unwrap_or(defaults.mention_limit),
            suggestion_count: parse_count(&lookup, "GEOTOPIC_SUGGESTION_COUNT")?
                .unwrap_or(defaults.suggestion_count),
        })
    }

    /// Check that the events file exists.
    /// Call this before any command that reads messages.
    pub fn require_events_file(&self) -> Result<()> {
        if !self.events_path.is_file() {
            anyhow::bail!(
                "Event file not found: {}\n\
                 Pass --events <path> or set GEOTOPIC_EVENTS_PATH in your .env file.",
                self.events_path.display()
            );
        }
        Ok(())
    }
}

fn parse_count<F>(lookup: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a non-negative integer, got {v:?}"))
        })
        .transpose()
}
