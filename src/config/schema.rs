//! Descriptor schema definitions.
//!
//! This module defines the complete structure of the deployment descriptor.
//! All types derive Serde traits for deserialization from the TOML file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root deployment descriptor for the front controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppDescriptor {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Base directory that static targets are resolved against.
    pub app_root: PathBuf,

    /// Ordered route declarations. Order is significant: first match wins.
    pub handlers: Vec<HandlerEntry>,

    /// Library dependencies, opaque to the dispatcher; resolved and
    /// provided by the external runtime.
    pub libraries: Vec<LibraryDep>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Admin identity settings.
    pub admin: AdminConfig,
}

impl Default for AppDescriptor {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            app_root: PathBuf::from("."),
            handlers: Vec::new(),
            libraries: Vec::new(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration. When set, every request on this
    /// listener counts as secure transport.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// One ordered route declaration.
///
/// Exactly one of `static_files`, `static_dir`, or `script` must be set;
/// validation enforces this before the table is built.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HandlerEntry {
    /// Exact path, or a pattern containing a `.*` wildcard.
    pub url: String,

    /// Single file target, matched by exact url equality.
    pub static_files: Option<String>,

    /// Deployment bookkeeping pattern paired with `static_files`.
    /// Ignored by the dispatcher.
    pub upload: Option<String>,

    /// Directory target; `url` is treated as a path prefix.
    pub static_dir: Option<String>,

    /// Opaque handler identifier (e.g. "conference.api") resolved through
    /// the registry and invoked by the HTTP layer, never interpreted here.
    pub script: Option<String>,

    /// `always` requires an encrypted transport.
    pub secure: Option<SecurePolicy>,

    /// `admin` requires an authenticated administrator.
    pub login: Option<LoginPolicy>,
}

impl HandlerEntry {
    /// Number of target fields declared. Valid entries have exactly one.
    pub fn declared_targets(&self) -> usize {
        [
            self.static_files.is_some(),
            self.static_dir.is_some(),
            self.script.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Transport policy values accepted in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurePolicy {
    /// Route is only reachable over an encrypted channel.
    Always,
}

/// Login policy values accepted in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginPolicy {
    /// Route is only reachable by an authenticated administrator.
    Admin,
}

/// A declared library dependency (name + version). Opaque to the
/// dispatcher; logged at startup for deployment visibility.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryDep {
    pub name: String,
    pub version: String,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Admin identity configuration.
///
/// The dispatcher only consumes a caller-asserted admin flag; this key is
/// what the HTTP boundary checks before asserting it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// API key for admin assertion (Bearer token).
    pub api_key: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            // WARNING: This is a placeholder! Change this in production.
            api_key: "CHANGE_ME_IN_PRODUCTION".to_string(),
        }
    }
}
