//! Descriptor management subsystem.
//!
//! # Data Flow
//! ```text
//! descriptor file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppDescriptor (validated, immutable)
//!     → compiled into the route table at startup
//! ```
//!
//! # Design Decisions
//! - Descriptor is immutable once loaded; changes require a restart
//! - All sections have defaults to allow minimal descriptors
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_descriptor, ConfigError};
pub use schema::{AppDescriptor, HandlerEntry, ListenerConfig};
pub use validation::{validate_descriptor, ValidationError};
