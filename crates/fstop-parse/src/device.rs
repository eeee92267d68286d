//! Camera/phone make and model inference.
//!
//! Fixed brand keyword checks over the lowercased text. Phone brands also
//! inspect the token right after the keyword: a purely numeric token joins
//! the model name ("iPhone 15"); anything else leaves the bare brand model.
//! Camera brands set only the make.
//!
//! Unlike location resolution, later keyword checks overwrite earlier
//! results (last-writer-wins in check order).

use fstop_core::StructuredQuery;

/// Phone brands whose following token may refine the model.
const PHONE_BRANDS: &[(&str, &str, &str)] = &[
    ("iphone", "Apple", "iPhone"),
    ("pixel", "Google", "Pixel"),
    ("galaxy", "Samsung", "Galaxy"),
];

/// Camera brands that only imply a make.
const CAMERA_BRANDS: &[(&str, &str)] = &[("nikon", "Nikon"), ("canon", "Canon"), ("sony", "Sony")];

/// Infer device make/model from brand keywords in lowercased text.
pub fn infer(lowered: &str, sq: &mut StructuredQuery) {
    for (keyword, make, display) in PHONE_BRANDS {
        if let Some(idx) = lowered.find(keyword) {
            sq.make = Some((*make).to_string());
            sq.model = Some(model_with_number(&lowered[idx..], display));
        }
    }

    for (keyword, make) in CAMERA_BRANDS {
        if lowered.contains(keyword) {
            sq.make = Some((*make).to_string());
        }
    }
}

/// Append the token following the keyword when it is purely numeric.
fn model_with_number(tail: &str, display: &str) -> String {
    let next = tail.split_whitespace().nth(1);
    match next {
        Some(tok) if !tok.is_empty() && tok.chars().all(|c| c.is_ascii_digit()) => {
            format!("{} {}", display, tok)
        }
        _ => display.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> StructuredQuery {
        let mut sq = StructuredQuery::new(text);
        infer(&text.to_lowercase(), &mut sq);
        sq
    }

    #[test]
    fn test_iphone_with_numeric_model() {
        let sq = run("taken with iphone 15");
        assert_eq!(sq.make.as_deref(), Some("Apple"));
        assert_eq!(sq.model.as_deref(), Some("iPhone 15"));
    }

    #[test]
    fn test_iphone_without_number() {
        let sq = run("taken with iphone");
        assert_eq!(sq.make.as_deref(), Some("Apple"));
        assert_eq!(sq.model.as_deref(), Some("iPhone"));
    }

    #[test]
    fn test_iphone_case_insensitive() {
        let sq = run("taken with my iPhone 13");
        assert_eq!(sq.make.as_deref(), Some("Apple"));
        assert_eq!(sq.model.as_deref(), Some("iPhone 13"));
    }

    #[test]
    fn test_pixel_with_number() {
        let sq = run("pixel 8 shots");
        assert_eq!(sq.make.as_deref(), Some("Google"));
        assert_eq!(sq.model.as_deref(), Some("Pixel 8"));
    }

    #[test]
    fn test_galaxy_bare() {
        let sq = run("galaxy photos at night");
        assert_eq!(sq.make.as_deref(), Some("Samsung"));
        assert_eq!(sq.model.as_deref(), Some("Galaxy"));
    }

    #[test]
    fn test_non_numeric_follower_is_ignored() {
        let sq = run("iphone pro shots");
        assert_eq!(sq.model.as_deref(), Some("iPhone"));
    }

    #[test]
    fn test_camera_brands_set_make_only() {
        let sq = run("shot on nikon");
        assert_eq!(sq.make.as_deref(), Some("Nikon"));
        assert!(sq.model.is_none());

        let sq = run("canon landscapes");
        assert_eq!(sq.make.as_deref(), Some("Canon"));

        let sq = run("sony street photography");
        assert_eq!(sq.make.as_deref(), Some("Sony"));
    }

    #[test]
    fn test_last_writer_wins_across_brands() {
        // A later camera-brand keyword overwrites the phone make but
        // leaves the phone model in place.
        let sq = run("iphone 15 photos imported from sony");
        assert_eq!(sq.make.as_deref(), Some("Sony"));
        assert_eq!(sq.model.as_deref(), Some("iPhone 15"));
    }

    #[test]
    fn test_no_brand_no_fields() {
        let sq = run("mountain photos");
        assert!(sq.make.is_none());
        assert!(sq.model.is_none());
    }
}
