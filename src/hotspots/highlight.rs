// Mention highlighting — splits message text around occurrences of the term
// so a renderer can mark them up.
//
// The term is escaped before it becomes a regex, so user input like "a.b" or
// "(btc" is matched literally and can never produce an invalid pattern.
// Case-insensitivity is Unicode-aware, so every occurrence the aggregator
// counts (after `to_lowercase`) is also highlighted.

use regex::RegexBuilder;
use serde::Serialize;

/// A run of message text, either plain or a highlighted occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Split `content` into plain and highlighted segments for `term`.
///
/// Matching is case-insensitive; highlighted segments keep the original
/// casing from the content. A blank term yields the whole content as one
/// plain segment (or nothing, for empty content).
pub fn highlight_segments<'a>(content: &'a str, term: &str) -> Vec<Segment<'a>> {
    let plain = |text: &'a str| Segment {
        text,
        highlighted: false,
    };

    let term = term.trim();
    if content.is_empty() {
        return Vec::new();
    }
    if term.is_empty() {
        return vec![plain(content)];
    }

    let Ok(re) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return vec![plain(content)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(content) {
        if m.start() > last {
            segments.push(plain(&content[last..m.start()]));
        }
        segments.push(Segment {
            text: m.as_str(),
            highlighted: true,
        });
        last = m.end();
    }
    if last < content.len() {
        segments.push(plain(&content[last..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(segments: &[Segment<'_>]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.highlighted {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect()
    }

    #[test]
    fn test_case_insensitive_keeps_original_case() {
        let segments = highlight_segments("Bitcoin fixes this. BITCOIN!", "bitcoin");
        assert_eq!(marked(&segments), "[Bitcoin] fixes this. [BITCOIN]!");
    }

    #[test]
    fn test_non_ascii_case_folded() {
        let segments = highlight_segments("CAFÉ or café", "café");
        assert_eq!(marked(&segments), "[CAFÉ] or [café]");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let segments = highlight_segments("a.b axb (c", "a.b");
        assert_eq!(marked(&segments), "[a.b] axb (c");
        let segments = highlight_segments("a.b axb (c", "(c");
        assert_eq!(marked(&segments), "a.b axb [(c]");
    }

    #[test]
    fn test_blank_term_is_plain() {
        let segments = highlight_segments("gm", "  ");
        assert_eq!(segments, vec![Segment { text: "gm", highlighted: false }]);
        assert!(highlight_segments("", "gm").is_empty());
    }
}
