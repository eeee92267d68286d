//! # fstop-ner
//!
//! Entity-recognition collaborator for fstop.
//!
//! The interpretation pipeline never loads a model itself: it consumes an
//! injected [`EntityRecognizer`], so the HTTP sidecar can be swapped for a
//! deterministic test double returning fixed spans.
//!
//! Implementations:
//! - [`SidecarRecognizer`]: client for a GLiNER-style zero-shot NER sidecar
//! - [`MockRecognizer`]: pre-seeded spans for tests

pub mod mock;
pub mod sidecar;

use async_trait::async_trait;
use fstop_core::{EntitySpan, Result};

pub use mock::MockRecognizer;
pub use sidecar::SidecarRecognizer;

/// Backend trait for named entity recognition.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Extract entity spans from text, ordered by position in the source.
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;

    /// Check if the recognition backend is available.
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
