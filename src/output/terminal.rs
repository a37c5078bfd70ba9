// Colored terminal output for searches, maps and topic suggestions.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use super::{format_time, truncate_chars};
use crate::events::message::ChatroomSummary;
use crate::geo::geohash::GeohashCell;
use crate::hotspots::highlight::highlight_segments;
use crate::hotspots::models::{MentionRecord, TopicSearch};
use crate::map::marker::marker_size;
use crate::map::view::{MapMode, MapView};
use crate::topics::traits::SuggestedTopic;

/// Display a decoded geohash.
pub fn display_decoded(geohash: &str, cell: &GeohashCell) {
    println!("{}", format!("#{geohash}").bright_magenta().bold());
    println!("  Center: {:.6}, {:.6}", cell.center.lat, cell.center.lng);
    println!(
        "  Cell:   ±{:.6}° lat, ±{:.6}° lng",
        cell.lat_half_width, cell.lng_half_width
    );
}

/// Display a topic search: ranked hotspots followed by the newest mentions.
pub fn display_search(search: &TopicSearch<'_>, mention_limit: usize) {
    if search.is_empty() {
        println!(
            "No locations discussing \"{}\" found. Try a different search term.",
            search.term
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== \"{}\" Hotspots ({} found) ===", search.term, search.hotspots.len()).bold()
    );
    println!(
        "  {} total mentions found",
        search.total_mentions().to_string().bright_red()
    );
    println!();

    println!(
        "  {:>4}  {:<14} {:>8}  {:>8}  {:>10}  {:>11}",
        "Rank".dimmed(),
        "Geohash".dimmed(),
        "Mentions".dimmed(),
        "Messages".dimmed(),
        "Lat".dimmed(),
        "Lng".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());

    for (i, hotspot) in search.hotspots.iter().enumerate() {
        println!(
            "  {:>4}. #{:<13} {:>8}  {:>8}  {:>10.4}  {:>11.4}",
            i + 1,
            hotspot.geohash,
            hotspot.mention_count.to_string().red().bold(),
            hotspot.total_messages,
            hotspot.coordinate.lat,
            hotspot.coordinate.lng,
        );
    }

    display_mentions(&search.mentions, &search.term, mention_limit);
}

/// Display the newest mentions with the term highlighted.
pub fn display_mentions(mentions: &[MentionRecord<'_>], term: &str, limit: usize) {
    if mentions.is_empty() || limit == 0 {
        return;
    }

    println!(
        "\n{}",
        format!("=== All Mentions ({} messages) ===", mentions.len()).bold()
    );
    println!();

    for mention in mentions.iter().take(limit) {
        let repeat = if mention.mention_count > 1 {
            format!(" ({}x)", mention.mention_count).yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  [{}] {} {}{}",
            format_time(mention.timestamp).dimmed(),
            format!("<{}>", mention.message.display_name()).cyan(),
            format!("#{}", mention.geohash).bright_magenta(),
            repeat,
        );

        let preview = truncate_chars(&mention.message.content, 200);
        let text: String = highlight_segments(&preview, term)
            .iter()
            .map(|s| {
                if s.highlighted {
                    s.text.black().on_yellow().to_string()
                } else {
                    s.text.to_string()
                }
            })
            .collect();
        println!("      {text}");
    }

    if mentions.len() > limit {
        println!(
            "\n  {}",
            format!("... and {} more", mentions.len() - limit).dimmed()
        );
    }
}

/// Display the points a map renderer would draw.
pub fn display_map(view: &MapView) {
    let title = match (view.mode, view.term.as_deref()) {
        (MapMode::Hotspots, Some(term)) => format!("=== \"{term}\" Hotspot Map ==="),
        _ => "=== World Map View ===".to_string(),
    };
    println!("\n{}", title.bold());

    if view.is_empty() {
        match view.term.as_deref() {
            Some(term) => println!("  No locations discussing \"{term}\" found"),
            None => println!("  No chatrooms found yet"),
        }
        return;
    }

    println!(
        "  Center: {:.4}, {:.4}  ({} points)",
        view.center.lat,
        view.center.lng,
        view.points.len()
    );
    println!();

    for point in &view.points {
        let c = point.coordinate();
        let size = marker_size(point);
        let label = if point.is_hotspot() {
            point.label().red().bold()
        } else {
            point.label().green().bold()
        };
        let magnitude = if point.is_hotspot() {
            format!("{} mentions", point.magnitude())
        } else {
            format!("{} messages", point.magnitude())
        };
        println!(
            "  {:<16} {:>10.4} {:>11.4}  {:<14} {}",
            label,
            c.lat,
            c.lng,
            magnitude,
            format!("size {size:.0}").dimmed(),
        );
    }
}

/// Display chatrooms, busiest first.
pub fn display_rooms(rooms: &[ChatroomSummary]) {
    if rooms.is_empty() {
        println!("No chatrooms found. Messages need a \"g\" (geohash) tag.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Active Chatrooms ({}) ===", rooms.len()).bold()
    );
    println!();
    for room in rooms {
        println!(
            "  {:<16} {:>6} messages",
            room.name.green(),
            room.message_count
        );
    }
}

/// Display ranked topic suggestions.
pub fn display_suggestions(heading: &str, suggestions: &[SuggestedTopic]) {
    println!("\n{}", format!("=== {heading} ===").bold());
    if suggestions.is_empty() {
        println!("  No topics found in these messages.");
        return;
    }
    for (i, s) in suggestions.iter().enumerate() {
        println!("  {:>2}. {:<24} {:.2}", i + 1, s.topic.bold(), s.score);
    }
}
