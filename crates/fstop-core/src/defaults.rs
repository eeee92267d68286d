//! Centralized default constants for fstop.
//!
//! **This module is the single source of truth** for shared default values
//! and environment variable names. The other crates reference these
//! constants instead of defining their own magic strings.

// =============================================================================
// NER SIDECAR
// =============================================================================

/// Env var: base URL of the NER sidecar service.
pub const ENV_NER_BASE_URL: &str = "NER_BASE_URL";

/// Default NER sidecar base URL.
pub const NER_BASE_URL: &str = "http://localhost:8090";

/// Entity types requested from the NER sidecar. Only place-like categories
/// feed the location resolver.
pub const NER_PLACE_TYPES: &[&str] = &["city", "state", "country", "location"];

/// Per-request timeout for NER extraction, in seconds.
pub const NER_TIMEOUT_SECS: u64 = 30;

/// Timeout for NER sidecar health checks, in seconds.
pub const NER_HEALTH_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// DOWNSTREAM SEARCH SERVICE
// =============================================================================

/// Env var: hostname of the downstream photo search service.
pub const ENV_SEARCH_HOST: &str = "SEARCH_HOST";

/// Env var: port of the downstream photo search service.
pub const ENV_SEARCH_PORT: &str = "SEARCH_PORT";

/// Default downstream search host.
pub const SEARCH_HOST: &str = "127.0.0.1";

/// Default downstream search port.
pub const SEARCH_PORT: &str = "2283";

// =============================================================================
// HTTP SERVER
// =============================================================================

/// Env var: bind address for the fstop API server.
pub const ENV_BIND_ADDR: &str = "FSTOP_BIND";

/// Default bind address.
pub const BIND_ADDR: &str = "0.0.0.0:8000";
