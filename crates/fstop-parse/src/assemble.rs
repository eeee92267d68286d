//! Filter assembly and encoding.
//!
//! Projects the populated [`StructuredQuery`] into the external
//! [`FilterPayload`], serializes it as compact JSON (null/empty/false
//! entries dropped by the payload's serde attributes), and percent-encodes
//! the result so it can ride inside a single URL query-parameter value.

use fstop_core::{FilterPayload, Result, StructuredQuery};

/// The assembled external filter: payload plus both serialized forms.
#[derive(Debug, Clone)]
pub struct AssembledFilter {
    /// The structured payload.
    pub payload: FilterPayload,
    /// Compact JSON serialization of the payload.
    pub serialized: String,
    /// Percent-encoded form of `serialized`, URL-parameter safe.
    pub encoded: String,
}

/// Build the external payload from a populated structured query.
pub fn assemble(sq: &StructuredQuery) -> Result<AssembledFilter> {
    let payload = FilterPayload::from(sq);
    let serialized = serde_json::to_string(&payload)?;
    let encoded = urlencoding::encode(&serialized).into_owned();

    Ok(AssembledFilter {
        payload,
        serialized,
        encoded,
    })
}
