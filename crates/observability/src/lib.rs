//! # hushdrop-observability
//!
//! Observability-Crate fuer Hushdrop:
//! - Prometheus-kompatible Metriken des Relays (`/metrics`)
//! - Structured JSON Logging via tracing-subscriber
//! - Request-Timing Middleware

pub mod logging;
pub mod metrics;
pub mod middleware;

pub use logging::logging_initialisieren;
pub use metrics::RelayMetrics;
pub use middleware::{http_metriken_middleware, timing_middleware};
