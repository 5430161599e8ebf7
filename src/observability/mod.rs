//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Registry, providers and the DAS client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (invocation counters and latency histograms)
//! ```
//!
//! # Design Decisions
//! - Structured logging, JSON when configured for machine parsing
//! - Metrics go through the `metrics` facade; installing a recorder is up to the host

pub mod logging;
pub mod metrics;
