//! Structured logging field name constants for fstop.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), request completions |
//! | DEBUG | Decision points, intermediate values |
//! | TRACE | Per-span/per-token iteration |

/// Subsystem originating the log event.
/// Values: "api", "parse", "ner"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "range_extractor", "location_resolver", "sidecar"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "parse", "recognize", "health_check"
pub const OPERATION: &str = "op";

/// Raw user query text.
pub const QUERY: &str = "query";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of entity spans returned by the recognizer.
pub const SPAN_COUNT: &str = "span_count";

/// Model name used for recognition.
pub const MODEL: &str = "model";

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
