//! HTTP front end subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, catch-all dispatch handler)
//!     → auth.rs (assert secure/admin flags at the boundary)
//!     → [route table resolves the path]
//!     → static_files.rs (file and directory targets)
//!       or registry handler invocation (script targets)
//!     → Send to client
//! ```

pub mod auth;
pub mod server;
pub mod static_files;

pub use server::{AppState, HttpServer};
