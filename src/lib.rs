//! Descriptor-driven HTTP front controller.
//!
//! Loads a declarative deployment descriptor at startup, compiles it into
//! an immutable ordered route table, and dispatches inbound request paths
//! to static assets or registered backend handlers, enforcing per-route
//! transport (secure-only) and auth (admin-only) policy.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               FRONT CONTROLLER               │
//!                    │                                              │
//!   Client Request   │  ┌────────┐   ┌─────────┐   ┌────────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│ routing │──▶│  registry  │  │
//!                    │  │ server │   │  table  │   │  (scripts) │  │
//!                    │  └────────┘   └─────────┘   └────────────┘  │
//!                    │       │             ▲                       │
//!                    │       ▼             │ compiled at startup   │
//!                    │  ┌────────────┐  ┌──┴───────┐               │
//!                    │  │static_files│  │  config  │               │
//!                    │  │ (fs reads) │  │descriptor│               │
//!                    │  └────────────┘  └──────────┘               │
//!                    │                                              │
//!                    │  Cross-cutting: observability (logs, metrics)│
//!                    └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod registry;
pub mod routing;

pub use config::schema::AppDescriptor;
pub use config::{load_descriptor, ConfigError};
pub use http::HttpServer;
pub use registry::{HandlerRegistry, ScriptHandler};
pub use routing::{DispatchError, Route, RouteKind, RouteTable};
