//! End-to-end pipeline tests over `QueryParser` with a mock recognizer.

use std::sync::Arc;

use fstop_ner::MockRecognizer;
use fstop_parse::QueryParser;

fn parser_with(mock: MockRecognizer) -> QueryParser {
    QueryParser::new(Arc::new(mock))
}

#[tokio::test]
async fn test_full_query_all_components() {
    let text = "favorite photos from Austin Texas taken with iphone 15 in 2022";
    let parser = parser_with(MockRecognizer::new().with_place(text, "Austin Texas", 20));

    let parsed = parser.parse(text).await.unwrap();
    let sq = &parsed.structured;

    assert!(sq.is_favorite);
    assert!(!sq.is_archived);
    assert_eq!(sq.city.as_deref(), Some("Austin"));
    assert_eq!(sq.state.as_deref(), Some("Texas"));
    assert_eq!(sq.country.as_deref(), Some("United States"));
    assert_eq!(sq.taken_after.as_deref(), Some("2022-01-01"));
    assert_eq!(sq.taken_before.as_deref(), Some("2022-12-31"));
    assert_eq!(sq.make.as_deref(), Some("Apple"));
    assert_eq!(sq.model.as_deref(), Some("iPhone 15"));
    assert_eq!(sq.remaining_query, text);

    // The payload carries everything except state, plus the residual query.
    let json: serde_json::Value = serde_json::from_str(&parsed.serialized).unwrap();
    assert_eq!(json["city"], "Austin");
    assert!(json.get("state").is_none());
    assert_eq!(json["country"], "United States");
    assert_eq!(json["takenAfter"], "2022-01-01");
    assert_eq!(json["isFavorite"], true);
    assert_eq!(json["model"], "iPhone 15");
    assert_eq!(json["query"], text);
}

#[tokio::test]
async fn test_plain_query_produces_query_only_payload() {
    let parser = parser_with(MockRecognizer::new());

    let parsed = parser.parse("sunset over the ocean").await.unwrap();
    assert_eq!(parsed.serialized, r#"{"query":"sunset over the ocean"}"#);
}

#[tokio::test]
async fn test_explicit_range_end_to_end() {
    let text = "photos between jan 5 and march 10 2024";
    let parser = parser_with(MockRecognizer::new());

    let parsed = parser.parse(text).await.unwrap();
    let sq = &parsed.structured;
    assert!(sq.taken_after.is_some());
    assert!(sq.taken_before.is_some());

    // "between/and" and "from/to" phrasings are equivalent.
    let other = parser
        .parse("photos from jan 5 to march 10 2024")
        .await
        .unwrap();
    assert_eq!(sq.taken_after, other.structured.taken_after);
    assert_eq!(sq.taken_before, other.structured.taken_before);
}

#[tokio::test]
async fn test_archived_flag_any_case() {
    let parser = parser_with(MockRecognizer::new());

    let parsed = parser.parse("ARCHIVED vacation pics").await.unwrap();
    assert!(parsed.structured.is_archived);

    let parsed = parser.parse("vacation pics").await.unwrap();
    assert!(!parsed.structured.is_archived);
}

#[tokio::test]
async fn test_recognition_failure_degrades_to_no_location() {
    let text = "archived photos of Paris, France";
    let parser = parser_with(MockRecognizer::new().failing());

    let parsed = parser.parse(text).await.unwrap();
    let sq = &parsed.structured;

    // Location fields absent, everything else still interpreted.
    assert!(sq.city.is_none());
    assert!(sq.country.is_none());
    assert!(sq.is_archived);
    assert_eq!(sq.remaining_query, text);
}

#[tokio::test]
async fn test_comma_span_decomposition() {
    let text = "photos of Paris, France";
    let parser = parser_with(MockRecognizer::new().with_place(text, "Paris, France", 10));

    let parsed = parser.parse(text).await.unwrap();
    assert_eq!(parsed.structured.city.as_deref(), Some("Paris"));
    assert_eq!(parsed.structured.country.as_deref(), Some("France"));
    assert!(parsed.structured.state.is_none());
}

#[tokio::test]
async fn test_encoded_payload_round_trips() {
    let text = "motion photos from Tokyo, Japan taken with pixel 8";
    let parser = parser_with(MockRecognizer::new().with_place(text, "Tokyo, Japan", 19));

    let parsed = parser.parse(text).await.unwrap();
    let decoded = urlencoding::decode(&parsed.encoded).unwrap();
    assert_eq!(decoded, parsed.serialized);

    let json: serde_json::Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(json["city"], "Tokyo");
    assert_eq!(json["country"], "Japan");
    assert_eq!(json["isMotion"], true);
    assert_eq!(json["make"], "Google");
    assert_eq!(json["model"], "Pixel 8");
}

#[tokio::test]
async fn test_parser_sends_raw_text_to_recognizer() {
    let mock = MockRecognizer::new();
    let parser = parser_with(mock.clone());

    parser.parse("Photos From BERLIN").await.unwrap();

    // The recognizer sees the original casing; only the lexical passes
    // work on lowercased text.
    assert_eq!(mock.calls(), vec!["Photos From BERLIN"]);
}
