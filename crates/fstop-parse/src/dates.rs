//! Date phrase normalization.
//!
//! Turns partial, human-written date phrases ("jan 5", "july 2024",
//! "2024-03-10") into fully-qualified calendar dates with directional
//! rounding. Day-of-month ambiguity always resolves to the first of the
//! month; only the time component distinguishes a range-opening date from
//! a range-closing one.
//!
//! Parse failure is reported as `None` and means "no date extracted" —
//! callers leave the corresponding filter field unset.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Directional rounding applied to a normalized date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Range-opening date: time clamped to 00:00:00.
    Start,
    /// Range-closing date: time clamped to 23:59:59.
    End,
}

/// Map a lowercased token to a month number.
fn month_from_token(token: &str) -> Option<u32> {
    let month = match token {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse an ordinal day token like "5th" or "21st".
fn day_from_ordinal(token: &str) -> Option<u32> {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    match &token[digits.len()..] {
        "st" | "nd" | "rd" | "th" => digits.parse().ok().filter(|d| (1..=31).contains(d)),
        _ => None,
    }
}

/// Returns true if the phrase contains a token made purely of digits.
///
/// This mirrors the year-presence heuristic: "jan 5" has a digit token,
/// "last january" does not.
pub fn has_digit_token(phrase: &str) -> bool {
    phrase
        .split_whitespace()
        .any(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
}

/// Parse a date phrase into a calendar date.
///
/// Recognizes month names and abbreviations, day numbers (plain or
/// ordinal), 4-digit years, and `YYYY-MM-DD` literals, in any token
/// order. Missing year resolves to the current calendar year, missing
/// month to January, missing day to the first of the month. A phrase
/// containing neither a month nor a year is unparseable.
pub fn parse_phrase(phrase: &str) -> Option<NaiveDate> {
    let mut month: Option<u32> = None;
    let mut year: Option<i32> = None;
    let mut day: Option<u32> = None;

    for raw in phrase.split_whitespace() {
        let token = raw.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if token.is_empty() {
            continue;
        }

        if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            return Some(date);
        }

        let lower = token.to_lowercase();
        if month.is_none() {
            if let Some(m) = month_from_token(&lower) {
                month = Some(m);
                continue;
            }
        }

        if token.chars().all(|c| c.is_ascii_digit()) {
            if token.len() == 4 && year.is_none() {
                year = token.parse().ok();
                continue;
            }
            if day.is_none() {
                if let Some(d) = token.parse::<u32>().ok().filter(|d| (1..=31).contains(d)) {
                    day = Some(d);
                }
            }
        } else if day.is_none() {
            if let Some(d) = day_from_ordinal(&lower) {
                day = Some(d);
            }
        }
    }

    if month.is_none() && year.is_none() {
        return None;
    }

    NaiveDate::from_ymd_opt(
        year.unwrap_or_else(|| Local::now().year()),
        month.unwrap_or(1),
        day.unwrap_or(1),
    )
}

/// Normalize a date phrase into a fully-qualified timestamp.
///
/// If the phrase carries no digit token, the current calendar year is
/// appended first (bare month/day phrases assume ongoing-year intent).
/// The time component is clamped per [`Rounding`].
pub fn normalize(phrase: &str, rounding: Rounding) -> Option<NaiveDateTime> {
    let owned;
    let phrase = if has_digit_token(phrase) {
        phrase
    } else {
        owned = format!("{} {}", phrase, Local::now().year());
        &owned
    };

    let date = parse_phrase(phrase)?;
    let time = match rounding {
        Rounding::Start => NaiveTime::from_hms_opt(0, 0, 0),
        Rounding::End => NaiveTime::from_hms_opt(23, 59, 59),
    }?;
    Some(date.and_time(time))
}

/// Last calendar day of the given month, leap-year correct.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt()
}
