//! Caller identity and transport classification.
//!
//! The dispatcher consumes two caller-asserted booleans; this is the
//! boundary where they are asserted. Admin identity is a bearer token
//! matching the configured admin API key. Transport counts as secure when
//! the listener terminates TLS itself or a fronting proxy says so via
//! `x-forwarded-proto`. Who the external invoker is (cron scheduler, task
//! queue, browser) is never inspected.

use axum::http::HeaderMap;

/// True when the request carries `Authorization: Bearer <api_key>`.
/// An empty configured key never authenticates anyone.
pub fn is_admin(headers: &HeaderMap, api_key: &str) -> bool {
    if api_key.is_empty() {
        return false;
    }
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {api_key}"))
        .unwrap_or(false)
}

/// True when the transport is encrypted: either this listener terminated
/// TLS, or a trusted fronting proxy forwarded an https request.
pub fn is_secure_transport(headers: &HeaderMap, tls_terminated: bool) -> bool {
    if tls_terminated {
        return true;
    }
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_admin_bearer_token() {
        let map = headers(&[("authorization", "Bearer secret-key")]);
        assert!(is_admin(&map, "secret-key"));
        assert!(!is_admin(&map, "other-key"));
        assert!(!is_admin(&HeaderMap::new(), "secret-key"));
    }

    #[test]
    fn test_empty_key_never_authenticates() {
        let map = headers(&[("authorization", "Bearer ")]);
        assert!(!is_admin(&map, ""));
    }

    #[test]
    fn test_forwarded_proto() {
        assert!(is_secure_transport(
            &headers(&[("x-forwarded-proto", "https")]),
            false
        ));
        assert!(is_secure_transport(
            &headers(&[("x-forwarded-proto", "HTTPS")]),
            false
        ));
        assert!(!is_secure_transport(
            &headers(&[("x-forwarded-proto", "http")]),
            false
        ));
        assert!(!is_secure_transport(&HeaderMap::new(), false));
    }

    #[test]
    fn test_tls_listener_is_always_secure() {
        assert!(is_secure_transport(&HeaderMap::new(), true));
    }
}
