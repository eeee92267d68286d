//! Location decomposition from entity spans.
//!
//! Consumes place-labeled spans from the recognizer and cross-references
//! the state and country gazetteers to split each span into city, state,
//! and country parts. Fields are first-writer-wins: a value set by an
//! earlier span is never overwritten.

use fstop_core::{EntitySpan, StructuredQuery};

use crate::gazetteer;

/// Entity labels treated as geographic places.
///
/// Covers both classic NER tagsets (GPE/LOC) and the zero-shot type names
/// requested from the sidecar.
pub fn is_place_label(label: &str) -> bool {
    matches!(
        label.to_lowercase().as_str(),
        "gpe" | "loc" | "location" | "place" | "city" | "state" | "country"
    )
}

/// Decompose place-labeled spans into city/state/country fields.
pub fn resolve(spans: &[EntitySpan], sq: &mut StructuredQuery) {
    for span in spans.iter().filter(|s| is_place_label(&s.label)) {
        if span.text.contains(',') {
            resolve_comma_parts(&span.text, sq);
        } else {
            resolve_whitespace_tokens(&span.text, sq);
        }
    }
}

/// "Paris, France" form: each comma-separated part is classified whole.
fn resolve_comma_parts(text: &str, sq: &mut StructuredQuery) {
    let mut city_part: Option<&str> = None;
    let mut state_part: Option<&str> = None;
    let mut country_part: Option<&str> = None;

    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if gazetteer::is_state(part) {
            state_part = Some(part);
        } else if gazetteer::is_country(part) {
            country_part = Some(part);
        } else if city_part.is_none() {
            city_part = Some(part);
        }
    }

    if let Some(city) = city_part {
        if sq.city.is_none() {
            sq.city = Some(city.to_string());
        }
    }
    if let Some(state) = state_part {
        if sq.state.is_none() {
            sq.state = Some(state.to_string());
        }
    }
    if let Some(country) = country_part {
        if sq.country.is_none() {
            sq.country = Some(country.to_string());
        }
    }
}

/// "Austin Texas" form: classify token by token; whatever the gazetteers
/// don't claim is the city name.
fn resolve_whitespace_tokens(text: &str, sq: &mut StructuredQuery) {
    let mut city_tokens: Vec<&str> = Vec::new();
    let mut state_candidate: Option<&str> = None;

    for token in text.split_whitespace() {
        if gazetteer::is_state(token) {
            state_candidate = Some(token);
        } else if gazetteer::is_country(token) {
            if sq.country.is_none() {
                sq.country = Some(token.to_string());
            }
        } else {
            city_tokens.push(token);
        }
    }

    if !city_tokens.is_empty() && sq.city.is_none() {
        sq.city = Some(city_tokens.join(" "));
    }
    if let Some(state) = state_candidate {
        if sq.state.is_none() {
            sq.state = Some(state.to_string());
        }
        // A US state hit with no country in sight implies the US.
        if sq.country.is_none() {
            sq.country = Some("United States".to_string());
        }
    }
}
