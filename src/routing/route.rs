//! Route model and dispatch errors.

use thiserror::Error;

use crate::routing::pattern::PathPattern;

/// What a matched route points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A single file served verbatim.
    StaticFile,
    /// A directory of files; the matched prefix is stripped before lookup.
    StaticDir,
    /// An opaque handler identifier resolved through the registry.
    Handler,
}

impl RouteKind {
    /// Short label for logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Self::StaticFile => "static_file",
            Self::StaticDir => "static_dir",
            Self::Handler => "handler",
        }
    }
}

/// Transport requirement for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportPolicy {
    /// Route may be served over an unencrypted channel.
    #[default]
    PlaintextAllowed,
    /// Route requires an encrypted channel (`secure = "always"`).
    SecureOnly,
}

/// Auth requirement for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPolicy {
    /// No auth requirement.
    #[default]
    None,
    /// Caller must be an authenticated administrator (`login = "admin"`).
    AdminOnly,
}

/// A single routing rule. Immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Original descriptor url, kept for logging and error context.
    pub url: String,

    /// Compiled matcher derived from `url` and the route kind.
    pub pattern: PathPattern,

    /// What the route points at.
    pub kind: RouteKind,

    /// File path, directory path, or handler identifier depending on kind.
    pub target: String,

    /// Auth requirement.
    pub auth: AuthPolicy,

    /// Transport requirement.
    pub transport: TransportPolicy,
}

/// Terminal resolution failures. None are retried by the dispatcher; the
/// HTTP front end translates each into a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No route matched the request path.
    #[error("no route matches {path}")]
    NotFound { path: String },

    /// The matched route requires secure transport and the request arrived
    /// over plaintext.
    #[error("route {url} requires secure transport")]
    InsecureTransport { url: String },

    /// The matched route requires admin auth and the caller is not an
    /// authenticated administrator.
    #[error("route {url} requires an admin login")]
    Unauthorized { url: String },
}
