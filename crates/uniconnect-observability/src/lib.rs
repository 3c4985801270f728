//! UniConnect Observability Module
//!
//! Provides configurable observability features including:
//! - Structured console and rolling-file logging via `tracing`
//! - Metrics collection via Prometheus
//! - HTTP request/response logging
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Features
//!
//! - `observability` (default): Enables file logging, request logging and metrics
//!
//! # Examples
//!
//! ```no_run
//! use uniconnect_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     let _metrics = init_metrics();
//!     // ... application code ...
//!     Ok(())
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

/// Interpret an `OBSERVABILITY_ENABLED` value. Anything other than
/// `false`/`0` (case-insensitive) enables observability; unset enables it.
pub fn parse_enabled_flag(raw: Option<&str>) -> bool {
    raw.map(|v| {
        let v = v.trim();
        !v.eq_ignore_ascii_case("false") && v != "0"
    })
    .unwrap_or(true)
}

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle as MetricsHandle;

#[cfg(feature = "observability")]
pub use self::logging::{init_tracing, is_observability_enabled, logging_middleware};
#[cfg(feature = "observability")]
pub use self::metrics::{init_metrics, metrics_middleware, metrics_router, track_calendar_query};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle when metrics are compiled out
    #[derive(Clone, Debug)]
    pub struct MetricsHandle;

    /// No-op observability check when feature disabled
    pub fn is_observability_enabled() -> bool {
        false
    }

    /// No-op logging middleware when feature disabled
    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// No-op metrics middleware when feature disabled
    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// Falls back to console logging when feature disabled
    pub fn init_tracing() -> anyhow::Result<()> {
        super::init_basic_console_logging();
        Ok(())
    }

    /// No-op metrics initialization when feature disabled
    pub fn init_metrics() -> Option<MetricsHandle> {
        None
    }

    /// Empty router when feature disabled
    pub fn metrics_router<S>(_handle: MetricsHandle) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
    }

    pub fn track_calendar_query(_kind: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
