//! NER sidecar client for zero-shot named entity recognition.
//!
//! fstop keeps the recognition model out of process: a small sidecar
//! service (GLiNER-style) exposes `/extract` and `/health`, and this
//! client asks it for place-like entity types only.
//!
//! # Configuration
//!
//! - `NER_BASE_URL`: Base URL of the sidecar (default: `http://localhost:8090`)
//! - Set to empty string to disable recognition entirely.

use async_trait::async_trait;
use fstop_core::{defaults, EntitySpan, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::EntityRecognizer;

/// HTTP client for the NER sidecar.
pub struct SidecarRecognizer {
    base_url: String,
    model: String,
    client: reqwest::Client,
    threshold: Option<f32>,
    timeout_secs: u64,
}

impl SidecarRecognizer {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            model: String::new(), // Populated on first health check
            client: reqwest::Client::new(),
            threshold: None,
            timeout_secs: defaults::NER_TIMEOUT_SECS,
        }
    }

    /// Create from environment variables.
    /// Returns None if `NER_BASE_URL` is explicitly set to empty string.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(defaults::ENV_NER_BASE_URL)
            .unwrap_or_else(|_| defaults::NER_BASE_URL.to_string());
        if base_url.is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }

    /// Set a confidence threshold forwarded to the sidecar.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Request payload for the sidecar `/extract` endpoint.
#[derive(Serialize)]
struct ExtractRequest<'a> {
    text: &'a str,
    entity_types: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<f32>,
}

/// Response payload from the sidecar `/extract` endpoint.
#[derive(Deserialize)]
struct ExtractResponse {
    entities: Vec<EntitySpan>,
}

/// Health check response from the sidecar.
#[derive(Deserialize)]
struct HealthResponse {
    status: String,
    #[allow(dead_code)]
    model: String,
}

#[async_trait]
impl EntityRecognizer for SidecarRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let url = format!("{}/extract", self.base_url);

        let request = ExtractRequest {
            text,
            entity_types: defaults::NER_PLACE_TYPES,
            threshold: self.threshold,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::Recognition(format!("sidecar request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Recognition(format!(
                "sidecar returned {}: {}",
                status, body
            )));
        }

        let result: ExtractResponse = response
            .json()
            .await
            .map_err(|e| Error::Recognition(format!("failed to parse sidecar response: {}", e)))?;

        debug!(
            component = "sidecar",
            span_count = result.entities.len(),
            "entities extracted"
        );
        Ok(result.entities)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(
                defaults::NER_HEALTH_TIMEOUT_SECS,
            ))
            .send()
            .await
        {
            Ok(resp) => {
                if resp.status().is_success() {
                    if let Ok(health) = resp.json::<HealthResponse>().await {
                        if health.status == "healthy" || health.status == "ok" {
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
            Err(_) => Ok(false),
        }
    }

    fn model_name(&self) -> &str {
        if self.model.is_empty() {
            "ner-sidecar"
        } else {
            &self.model
        }
    }
}
