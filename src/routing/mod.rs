//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path (+ caller-asserted secure/admin flags)
//!     → table.rs (ordered scan, policy checks)
//!     → pattern.rs (evaluate match conditions)
//!     → Return: matched Route or DispatchError
//!
//! Route compilation (at startup):
//!     HandlerEntry[] (validated descriptor)
//!     → compile patterns (exact, prefix, wildcard)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex engine; wildcards are hand-compiled literal pieces
//! - Deterministic: first match wins, in declaration order
//! - Resolution is pure and re-entrant; no locking required

pub mod pattern;
pub mod route;
pub mod table;

pub use pattern::PathPattern;
pub use route::{AuthPolicy, DispatchError, Route, RouteKind, TransportPolicy};
pub use table::RouteTable;
