//! Handler indirection table.
//!
//! Script routes carry an opaque identifier such as "conference.api". The
//! dispatcher only resolves the identifier; the embedding application
//! registers the implementation behind it here, and the HTTP layer invokes
//! it. Identifiers declared in the descriptor but never registered are
//! reported at startup and answered with 501 at request time.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;

use crate::routing::{RouteKind, RouteTable};

/// A registered backend request handler.
pub trait ScriptHandler: Send + Sync {
    /// Handle one request. The front controller has already enforced the
    /// route's transport and auth policy.
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response>;
}

/// Plain async functions and closures are handlers.
impl<F, Fut> ScriptHandler for F
where
    F: Fn(Request<Body>) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        Box::pin(self(request))
    }
}

/// Map from handler identifier to implementation.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ScriptHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an implementation for a handler identifier. Registering
    /// the same identifier twice replaces the earlier implementation.
    pub fn register(&mut self, id: impl Into<String>, handler: impl ScriptHandler + 'static) {
        self.handlers.insert(id.into(), Arc::new(handler));
    }

    /// Look up the implementation behind an identifier.
    pub fn get(&self, id: &str) -> Option<Arc<dyn ScriptHandler>> {
        self.handlers.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Handler identifiers declared in the table with no registered
    /// implementation.
    pub fn missing_from<'a>(&self, table: &'a RouteTable) -> Vec<&'a str> {
        table
            .routes()
            .iter()
            .filter(|route| route.kind == RouteKind::Handler && !self.contains(&route.target))
            .map(|route| route.target.as_str())
            .collect()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
