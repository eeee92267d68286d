//! Query parsing entry point.
//!
//! [`QueryParser`] runs one pass over raw user text: flag detection, range
//! extraction, location resolution (via the injected recognizer), device
//! inference, then payload assembly. Each component writes its own
//! disjoint fields of the request-scoped [`StructuredQuery`]; no mutable
//! state crosses requests.

use std::sync::Arc;
use std::time::Instant;

use fstop_core::{FilterPayload, Result, StructuredQuery};
use fstop_ner::EntityRecognizer;
use tracing::{debug, warn};

use crate::{assemble, device, flags, location, range};

/// The full result of interpreting one query.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    /// The internal structured record, including fields (like `state`)
    /// that the external payload drops.
    pub structured: StructuredQuery,
    /// The external filter payload.
    pub payload: FilterPayload,
    /// Compact JSON form of the payload.
    pub serialized: String,
    /// Percent-encoded JSON, ready to embed as a URL query parameter.
    pub encoded: String,
}

/// Natural-language query interpreter with an injected entity recognizer.
#[derive(Clone)]
pub struct QueryParser {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl QueryParser {
    /// Create a parser around the given recognizer.
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Check that the recognizer is reachable. The service must not accept
    /// requests before this passes once.
    pub async fn health_check(&self) -> Result<bool> {
        self.recognizer.health_check().await
    }

    /// Interpret raw user text into a structured filter.
    ///
    /// Recognition failure degrades to "no location fields" rather than
    /// failing the request; per-field date parse failures likewise leave
    /// fields unset.
    pub async fn parse(&self, text: &str) -> Result<ParsedQuery> {
        let started = Instant::now();
        let lowered = text.to_lowercase();
        let mut sq = StructuredQuery::new(text);

        flags::detect(&lowered, &mut sq);
        range::extract(&lowered, &mut sq);

        match self.recognizer.recognize(text).await {
            Ok(spans) => {
                debug!(
                    component = "location_resolver",
                    span_count = spans.len(),
                    model = self.recognizer.model_name(),
                    "entity spans received"
                );
                location::resolve(&spans, &mut sq);
            }
            Err(e) => {
                warn!(
                    component = "location_resolver",
                    error = %e,
                    "recognition failed; location fields left unset"
                );
            }
        }

        device::infer(&lowered, &mut sq);

        let assembled = assemble::assemble(&sq)?;

        debug!(
            op = "parse",
            query = text,
            duration_ms = started.elapsed().as_millis() as u64,
            "query interpreted"
        );

        Ok(ParsedQuery {
            structured: sq,
            payload: assembled.payload,
            serialized: assembled.serialized,
            encoded: assembled.encoded,
        })
    }
}
