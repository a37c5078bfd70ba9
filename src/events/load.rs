// Event loading — reads exported chat events from disk.
//
// Accepts either a JSON array of events or newline-delimited JSON (one event
// per line, as relay dumps usually come). Blank lines are ignored.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::message::Message;

/// Parse events from a string holding a JSON array or JSON lines.
pub fn parse_messages(input: &str) -> Result<Vec<Message>> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Failed to parse event array");
    }

    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Failed to parse event on line {}", i + 1))
        })
        .collect()
}

/// Load all events from a file.
pub fn load_messages(path: &Path) -> Result<Vec<Message>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let messages =
        parse_messages(&raw).with_context(|| format!("Invalid event file {}", path.display()))?;

    info!(path = %path.display(), count = messages.len(), "Loaded chat events");
    Ok(messages)
}
