//! HTTP front end.
//!
//! # Responsibilities
//! - Build the Axum router with a catch-all dispatch handler
//! - Derive the caller-asserted secure/admin flags at the boundary
//! - Resolve each request path through the route table
//! - Serve static targets, invoke registered script handlers
//! - Translate dispatch errors into terminal HTTP responses
//! - Wire up middleware (tracing, timeout, request ID)
//!
//! # Design Decisions
//! - The dispatcher stays pure; all I/O and policy translation lives here
//! - NotFound → 404, InsecureTransport → 301 to https, Unauthorized → 403
//! - Unregistered handler identifiers answer 501, never panic

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::AppDescriptor;
use crate::http::auth::{is_admin, is_secure_transport};
use crate::http::static_files::{resolve_dir_target, serve_file};
use crate::observability::metrics;
use crate::registry::HandlerRegistry;
use crate::routing::{DispatchError, RouteKind, RouteTable};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub registry: Arc<HandlerRegistry>,
    pub admin_api_key: String,
    pub app_root: PathBuf,
    /// True when this listener terminates TLS itself.
    pub tls_terminated: bool,
}

/// HTTP server for the front controller.
pub struct HttpServer {
    router: Router,
    config: AppDescriptor,
}

impl HttpServer {
    /// Create a new HTTP server from a validated descriptor, compiled
    /// route table, and handler registry.
    pub fn new(config: AppDescriptor, table: RouteTable, registry: HandlerRegistry) -> Self {
        let state = AppState {
            table: Arc::new(table),
            registry: Arc::new(registry),
            admin_api_key: config.admin.api_key.clone(),
            app_root: config.app_root.clone(),
            tls_terminated: config.listener.tls.is_some(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppDescriptor, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router, for embedding or testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until shutdown, terminating TLS when configured.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .listener
            .bind_address
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        match &self.config.listener.tls {
            Some(tls) => {
                let rustls =
                    load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await?;
                tracing::info!(address = %addr, "HTTPS server starting");
                axum_server::bind_rustls(addr, rustls)
                    .serve(self.router.into_make_service())
                    .await?;
            }
            None => {
                let listener = TcpListener::bind(addr).await?;
                tracing::info!(address = %listener.local_addr()?, "HTTP server starting");
                axum::serve(listener, self.router.into_make_service())
                    .with_graceful_shutdown(shutdown_signal())
                    .await?;
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the descriptor.
    pub fn config(&self) -> &AppDescriptor {
        &self.config
    }
}

/// Load TLS configuration from certificate and key files.
async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, std::io::Error> {
    if !cert_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Certificate file not found: {}", cert_path.display()),
        ));
    }
    if !key_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Private key file not found: {}", key_path.display()),
        ));
    }

    RustlsConfig::from_pem_file(cert_path, key_path).await
}

/// Main dispatch handler.
/// Resolves the path through the route table and acts on the result.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    let secure = is_secure_transport(request.headers(), state.tls_terminated);
    let admin = is_admin(request.headers(), &state.admin_api_key);

    let route = match state.table.resolve(&path, secure, admin) {
        Ok(route) => route,
        Err(error) => {
            let response = translate_error(&error, request.uri(), request.headers());
            tracing::debug!(path = %path, error = %error, "Dispatch rejected");
            metrics::record_dispatch(&method, response.status().as_u16(), "none", start_time);
            return response;
        }
    };

    tracing::debug!(
        path = %path,
        route = %route.url,
        kind = route.kind.label(),
        "Route resolved"
    );

    let kind = route.kind;
    let response = match kind {
        RouteKind::StaticFile => serve_file(&state.app_root.join(&route.target)).await,
        RouteKind::StaticDir => {
            match resolve_dir_target(&state.app_root, &route.target, &route.url, &path) {
                Some(target) => serve_file(&target).await,
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        RouteKind::Handler => match state.registry.get(&route.target) {
            Some(handler) => handler.call(request).await,
            None => {
                tracing::error!(handler = %route.target, "Handler identifier not registered");
                (
                    StatusCode::NOT_IMPLEMENTED,
                    Json(json!({ "error": "handler not registered", "handler": route.target })),
                )
                    .into_response()
            }
        },
    };

    metrics::record_dispatch(&method, response.status().as_u16(), kind.label(), start_time);
    response
}

/// Translate a terminal dispatch error into its HTTP response.
fn translate_error(error: &DispatchError, uri: &Uri, headers: &HeaderMap) -> Response {
    match error {
        DispatchError::NotFound { path } => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no matching route", "path": path })),
        )
            .into_response(),
        DispatchError::InsecureTransport { url } => {
            match https_location(uri, headers) {
                Some(location) => Response::builder()
                    .status(StatusCode::MOVED_PERMANENTLY)
                    .header(header::LOCATION, location)
                    .body(Body::empty())
                    .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
                // No host to redirect to; reject instead.
                None => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "secure transport required", "route": url })),
                )
                    .into_response(),
            }
        }
        DispatchError::Unauthorized { url } => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "admin login required", "route": url })),
        )
            .into_response(),
    }
}

/// The https equivalent of the request target, if the host is known.
fn https_location(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let host = uri
        .authority()
        .map(|authority| authority.to_string())
        .or_else(|| {
            headers
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })?;
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    Some(format!("https://{host}{path_and_query}"))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
