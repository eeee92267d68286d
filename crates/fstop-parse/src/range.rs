//! Date-range extraction.
//!
//! Two mutually exclusive strategies are tried in a fixed priority order,
//! first match wins:
//!
//! 1. Explicit ranges: "from X to Y", "from X through Y", "between X and Y".
//! 2. Bare year mentions: "taken in 2022", "dogs in 2023".
//!
//! At most one strategy applies per request; results are never merged.
//! Both write `taken_after`/`taken_before` as date-only ISO-8601 strings.

use chrono::{Datelike, Local};
use fstop_core::StructuredQuery;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dates::{self, Rounding};

/// Tokens unlikely to belong to a date, stripped from the trailing phrase
/// of an explicit range before anchor parsing.
const NON_DATE_TOKENS: &[&str] = &[
    "taken", "with", "iphone", "pixel", "nikon", "canon", "sony", "by", "on", ",",
];

/// Matches "taken/created ... in <year>" or a bare "in <year>".
static BARE_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\b(?:taken|created)\b.*?\bin\s+|\bin\s+)(?P<year>\d{4})\b")
        .expect("bare-year pattern is valid")
});

/// Extract a date range from lowercased text into `taken_after`/`taken_before`.
pub fn extract(lowered: &str, sq: &mut StructuredQuery) {
    let explicit = (lowered.contains(" from ")
        && (lowered.contains(" to ") || lowered.contains(" through ")))
        || (lowered.contains(" between ") && lowered.contains(" and "));

    if explicit {
        extract_explicit(lowered, sq);
    } else if let Some(caps) = BARE_YEAR.captures(lowered) {
        if let Ok(year) = caps["year"].parse::<i32>() {
            sq.taken_after = Some(format!("{:04}-01-01", year));
            sq.taken_before = Some(format!("{:04}-12-31", year));
        }
    }
}

/// Handle the "from X to Y" family after phrasing normalization.
fn extract_explicit(lowered: &str, sq: &mut StructuredQuery) {
    // Reduce all three phrasings to a single "from X to Y" shape.
    let normalized = lowered
        .replace(" through ", " to ")
        .replace(" between ", " from ")
        .replace(" and ", " to ");

    let after_from = match normalized.splitn(2, " from ").nth(1) {
        Some(rest) => rest,
        None => return,
    };
    let mut halves = after_from.splitn(2, " to ");
    let leading = match halves.next() {
        Some(s) => s.trim(),
        None => return,
    };
    let trailing = match halves.next() {
        Some(s) => strip_non_date_tokens(s.trim()),
        None => return,
    };

    // At most the first two tokens of the trailing phrase form the
    // month/year anchor; anything beyond is trailing noise (a stray day
    // number, the rest of the sentence).
    let tokens: Vec<&str> = trailing.split_whitespace().collect();
    let candidate = if tokens.len() < 2 {
        trailing.clone()
    } else {
        tokens[..2].join(" ")
    };
    let anchor = dates::parse_phrase(&candidate);

    // The leading phrase inherits the anchor's implied year when it
    // carries no digit token of its own.
    let leading_owned;
    let leading = if dates::has_digit_token(leading) {
        leading
    } else {
        let year = anchor
            .map(|d| d.year())
            .unwrap_or_else(|| Local::now().year());
        leading_owned = format!("{} {}", leading, year);
        &leading_owned
    };

    if let Some(start) = dates::normalize(leading, Rounding::Start) {
        sq.taken_after = Some(start.date().to_string());
    }

    // A parsed anchor closes the range at its month's true last day;
    // otherwise fall back to normalizing the full trailing phrase.
    let end = match anchor {
        Some(d) => dates::last_day_of_month(d.year(), d.month()),
        None => dates::normalize(&trailing, Rounding::End).map(|dt| dt.date()),
    };
    if let Some(end) = end {
        sq.taken_before = Some(end.to_string());
    }
}

fn strip_non_date_tokens(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .filter(|t| !NON_DATE_TOKENS.contains(t))
        .collect::<Vec<_>>()
        .join(" ")
}
