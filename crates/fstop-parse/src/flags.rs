//! Lexical boolean-flag detection.
//!
//! Keyword presence alone triggers a flag; there is no negation handling
//! ("not archived" still sets `is_archived`). Callers pass text that has
//! already been lowercased once at the pipeline entry.

use fstop_core::StructuredQuery;

/// Set boolean filters from keyword presence in lowercased text.
pub fn detect(lowered: &str, sq: &mut StructuredQuery) {
    if lowered.contains("archived") {
        sq.is_archived = true;
    }
    if lowered.contains("favorite") || lowered.contains("favourite") {
        sq.is_favorite = true;
    }
    if lowered.contains("motion") {
        sq.is_motion = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> StructuredQuery {
        let mut sq = StructuredQuery::new(text);
        detect(&text.to_lowercase(), &mut sq);
        sq
    }

    #[test]
    fn test_archived_substring_sets_flag() {
        assert!(run("archived beach photos").is_archived);
        assert!(run("ARCHIVED beach photos").is_archived);
        assert!(!run("beach photos").is_archived);
    }

    #[test]
    fn test_favorite_both_spellings() {
        assert!(run("favorite dogs").is_favorite);
        assert!(run("favourite dogs").is_favorite);
        assert!(!run("dogs").is_favorite);
    }

    #[test]
    fn test_motion_photos() {
        assert!(run("motion photos of fireworks").is_motion);
        assert!(!run("photos of fireworks").is_motion);
    }

    #[test]
    fn test_no_negation_handling() {
        // Presence alone triggers the flag.
        assert!(run("not archived").is_archived);
    }

    #[test]
    fn test_flags_are_independent() {
        let sq = run("archived favorite motion shots");
        assert!(sq.is_archived);
        assert!(sq.is_favorite);
        assert!(sq.is_motion);
    }
}
