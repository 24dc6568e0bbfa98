//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatch handler produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging; request ID flows through tower-http middleware
//! - Metrics are cheap (atomic increments)
//! - The exporter is optional and off by default

pub mod logging;
pub mod metrics;
