//! Release-feed adapter.
//!
//! The feed is ordinary RSS, but the interesting fields are packed into
//! each item's title following the site's `[ScanGroup] Title c123 - ...`
//! convention, with the release date as the first line of the description.
//! The slicing below is contractual: scan group ends at the first `]`,
//! the chapter starts at the *last* `c`, and the display title is whatever
//! sits between the two. Feed titles carry no grammar guarantee, so a
//! missing marker degrades to an empty field rather than an error.

use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::error::{HeraldError, Result};
use crate::domain::FeedEntry;

/// Width the display title is left-justified to.
const TITLE_PAD_WIDTH: usize = 15;
/// Raw titles longer than this are cut and marked with an ellipsis.
const TITLE_MAX_CHARS: usize = 75;
/// Literal separator between the release date and the rest of the
/// item description.
const DESCRIPTION_BREAK: &str = "<br />";

pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = parser::parse(body).map_err(|e| HeraldError::FeedParse(e.to_string()))?;

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let raw_title = entry
                .title
                .map(|t| decode_html_entities(&t.content).to_string())
                .unwrap_or_default();
            let description = entry
                .summary
                .map(|s| decode_html_entities(&s.content).to_string())
                .unwrap_or_default();

            let date = description
                .split(DESCRIPTION_BREAK)
                .next()
                .unwrap_or_default()
                .to_string();
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();

            let (scan, title, chapter) = split_title(&raw_title);

            FeedEntry {
                title,
                link,
                chapter,
                scan,
                date,
            }
        })
        .collect();

    Ok(entries)
}

/// Slice a raw item title into `(scan, padded display title, chapter)`.
///
/// All positions are character positions, not byte offsets; titles are
/// routinely non-ASCII.
pub fn split_title(raw: &str) -> (String, String, String) {
    let chars: Vec<char> = raw.chars().collect();

    let open = chars.iter().position(|&c| c == '[');
    let close = chars.iter().position(|&c| c == ']');
    let last_c = chars.iter().rposition(|&c| c == 'c');

    let scan = match (open, close) {
        (Some(open), Some(close)) if open < close => chars[open + 1..close].iter().collect(),
        _ => String::new(),
    };

    // "c12 - extra" -> "c12 " -> "c12" -> "12"
    let chapter = match last_c {
        Some(pos) => {
            let rest: String = chars[pos..].iter().collect();
            let token = rest
                .split('-')
                .next()
                .unwrap_or("")
                .split(' ')
                .next()
                .unwrap_or("");
            token.strip_prefix('c').unwrap_or(token).to_string()
        }
        None => String::new(),
    };

    // The display title runs from two past the first `]` (bracket plus one
    // space) to the character before the last `c`.
    let start = close.map(|pos| pos + 2).unwrap_or(0);
    let end = last_c
        .map(|pos| pos.saturating_sub(1))
        .unwrap_or(chars.len());
    let title: String = if start < end {
        chars[start..end.min(chars.len())].iter().collect()
    } else {
        String::new()
    };

    (scan, pad_title(&title), chapter)
}

/// Truncate at [`TITLE_MAX_CHARS`] with a `...` marker, then left-justify
/// to [`TITLE_PAD_WIDTH`]. The marker lands after padding, matching the
/// digest's fixed-column layout.
fn pad_title(raw: &str) -> String {
    let (cut, tail) = if raw.chars().count() > TITLE_MAX_CHARS {
        (raw.chars().take(TITLE_MAX_CHARS).collect(), "...")
    } else {
        (raw.to_string(), "")
    };
    format!("{:<width$}{}", cut, tail, width = TITLE_PAD_WIDTH)
}
