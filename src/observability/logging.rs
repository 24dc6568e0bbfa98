//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Apply the descriptor's log level as the default filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - RUST_LOG always wins over the descriptor level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. The descriptor's log level is the
/// default; the RUST_LOG environment variable overrides it.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("frontdoor={default_level},tower_http=info").into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
