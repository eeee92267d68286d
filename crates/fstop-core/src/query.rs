//! Query data model: the structured result record and its external payload.
//!
//! [`StructuredQuery`] is the single mutable record one request flows
//! through: it starts empty, each pipeline component writes its own
//! disjoint fields exactly once, and the assembler projects it into a
//! [`FilterPayload`] for the downstream search service.

use serde::{Deserialize, Serialize};

/// A labeled substring produced by the upstream entity-recognition model.
///
/// Produced externally (NER sidecar or a test double); read-only to the
/// interpretation pipeline, which only consumes place-like labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntitySpan {
    /// The entity text as it appears in the source.
    pub text: String,
    /// The entity type label (e.g., "city", "location").
    pub label: String,
    /// Confidence score from the recognition model (0.0-1.0).
    pub score: f32,
    /// Character start offset in the source text.
    pub start: usize,
    /// Character end offset in the source text.
    pub end: usize,
}

/// The single mutable result record for one parse request.
///
/// Invariant: every field starts `None`/false and is only ever set, never
/// unset, by exactly one pipeline component. Request-scoped; built once,
/// projected into a [`FilterPayload`], then discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,

    /// Date-only ISO-8601 strings (YYYY-MM-DD).
    pub created_after: Option<String>,
    pub created_before: Option<String>,
    pub taken_after: Option<String>,
    pub taken_before: Option<String>,

    pub is_archived: bool,
    pub is_favorite: bool,
    pub is_motion: bool,

    pub make: Option<String>,
    pub model: Option<String>,

    /// The original input text, always populated; forwarded for downstream
    /// semantic search.
    pub remaining_query: String,
}

impl StructuredQuery {
    /// Create an empty record carrying the original input text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            remaining_query: text.into(),
            ..Self::default()
        }
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Externally-facing projection of [`StructuredQuery`].
///
/// Field names follow the downstream search API (camelCase). All
/// null/empty/false entries are omitted from serialization; `query` is
/// always present. `state` is computed internally but deliberately absent
/// here: the downstream API has no state filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_before: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_archived: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_favorite: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_motion: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// The residual free-text query, always present.
    pub query: String,
}

/// Drop empty strings so they serialize as absent, not as `""`.
fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

impl From<&StructuredQuery> for FilterPayload {
    fn from(sq: &StructuredQuery) -> Self {
        Self {
            city: non_empty(&sq.city),
            country: non_empty(&sq.country),
            created_after: non_empty(&sq.created_after),
            created_before: non_empty(&sq.created_before),
            taken_after: non_empty(&sq.taken_after),
            taken_before: non_empty(&sq.taken_before),
            is_archived: sq.is_archived,
            is_favorite: sq.is_favorite,
            is_motion: sq.is_motion,
            make: non_empty(&sq.make),
            model: non_empty(&sq.model),
            query: sq.remaining_query.clone(),
        }
    }
}
