//! Mock entity recognizer for deterministic testing.
//!
//! Returns pre-seeded spans keyed by input text, without invoking real
//! inference. Records every call so tests can assert on what the pipeline
//! sent to the recognizer.
//!
//! ## Usage
//!
//! ```rust
//! use fstop_ner::{EntityRecognizer, MockRecognizer};
//!
//! # async fn example() {
//! let recognizer = MockRecognizer::new()
//!     .with_place("photos from Paris, France", "Paris, France", 11);
//!
//! let spans = recognizer.recognize("photos from Paris, France").await.unwrap();
//! assert_eq!(spans[0].text, "Paris, France");
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fstop_core::{EntitySpan, Error, Result};

use crate::EntityRecognizer;

/// Mock recognizer returning seeded spans.
#[derive(Clone, Default)]
pub struct MockRecognizer {
    spans: HashMap<String, Vec<EntitySpan>>,
    fail: bool,
    call_log: Arc<Mutex<Vec<String>>>,
}

impl MockRecognizer {
    /// Create a mock that returns no spans for any input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a place-labeled span for the given input text.
    pub fn with_place(self, input: &str, span_text: &str, start: usize) -> Self {
        self.with_span(
            input,
            EntitySpan {
                text: span_text.to_string(),
                label: "location".to_string(),
                score: 0.95,
                start,
                end: start + span_text.len(),
            },
        )
    }

    /// Seed an arbitrary span for the given input text.
    pub fn with_span(mut self, input: &str, span: EntitySpan) -> Self {
        self.spans.entry(input.to_string()).or_default().push(span);
        self
    }

    /// Make every `recognize` call fail, for degraded-path tests.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Inputs the recognizer has been called with, in order.
    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl EntityRecognizer for MockRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        self.call_log.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(Error::Recognition("mock failure".to_string()));
        }
        Ok(self.spans.get(text).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.fail)
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_seeded_spans() {
        let rec = MockRecognizer::new().with_place("dogs in Austin Texas", "Austin Texas", 8);

        let spans = rec.recognize("dogs in Austin Texas").await.unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Austin Texas");
        assert_eq!(spans[0].label, "location");
    }

    #[tokio::test]
    async fn test_mock_unknown_input_yields_no_spans() {
        let rec = MockRecognizer::new();
        let spans = rec.recognize("no places here").await.unwrap();
        assert!(spans.is_empty());
    }

    #[tokio::test]
    async fn test_mock_failing_mode() {
        let rec = MockRecognizer::new().failing();
        assert!(rec.recognize("anything").await.is_err());
        assert!(!rec.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let rec = MockRecognizer::new();
        rec.recognize("first").await.unwrap();
        rec.recognize("second").await.unwrap();
        assert_eq!(rec.calls(), vec!["first", "second"]);
    }
}
