//! Static asset responses.
//!
//! # Responsibilities
//! - Serve single-file and directory routes from the app root
//! - Derive Content-Type from the file extension
//! - Reject path traversal out of a directory route's target
//!
//! # Design Decisions
//! - Files are read per request; caching belongs to a fronting CDN
//! - Unknown extensions fall back to application/octet-stream

use std::path::{Component, Path, PathBuf};

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Content-Type for a file path, by extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match extension {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// Serve one file from disk. Missing files become 404, everything else 500.
pub async fn serve_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type_for(path))
            .body(Body::from(bytes))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Static file not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(error) => {
            tracing::error!(path = %path.display(), error = %error, "Failed to read static file");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Map a request path under a directory route onto a file inside the
/// target directory. Returns None when the remainder tries to escape the
/// directory (`..`) or is empty.
pub fn resolve_dir_target(
    app_root: &Path,
    target_dir: &str,
    matched_prefix: &str,
    request_path: &str,
) -> Option<PathBuf> {
    let remainder = request_path
        .strip_prefix(matched_prefix)?
        .trim_start_matches('/');
    if remainder.is_empty() {
        return None;
    }

    let relative = Path::new(remainder);
    let escapes = relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_)));
    if escapes {
        tracing::warn!(path = request_path, "Rejected traversal in static dir request");
        return None;
    }

    Some(app_root.join(target_dir).join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Path::new("app.js")), "application/javascript; charset=utf-8");
        assert_eq!(content_type_for(Path::new("favicon.ico")), "image/x-icon");
        assert_eq!(content_type_for(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }

    #[test]
    fn test_resolve_dir_target() {
        let resolved = resolve_dir_target(Path::new("webapp"), "static/js", "/js", "/js/app.js");
        assert_eq!(resolved, Some(PathBuf::from("webapp/static/js/app.js")));

        let nested = resolve_dir_target(Path::new("."), "static/js", "/js", "/js/vendor/lib.js");
        assert_eq!(nested, Some(PathBuf::from("./static/js/vendor/lib.js")));
    }

    #[test]
    fn test_traversal_rejected() {
        assert_eq!(
            resolve_dir_target(Path::new("."), "static/js", "/js", "/js/../secrets.toml"),
            None
        );
        assert_eq!(
            resolve_dir_target(Path::new("."), "static/js", "/js", "/js/a/../../x"),
            None
        );
    }

    #[test]
    fn test_bare_prefix_has_no_target() {
        assert_eq!(resolve_dir_target(Path::new("."), "static/js", "/js", "/js"), None);
        assert_eq!(resolve_dir_target(Path::new("."), "static/js", "/js", "/js/"), None);
    }
}
