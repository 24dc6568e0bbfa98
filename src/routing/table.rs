//! Route table construction and resolution.
//!
//! # Responsibilities
//! - Compile validated descriptor entries into routes
//! - Look up the first matching route for a request path
//! - Enforce per-route transport and auth policy
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; first match wins, deterministic
//! - Explicit errors rather than a silent default route
//! - Resolution is a pure function of its inputs and the table

use crate::config::schema::{HandlerEntry, LoginPolicy, SecurePolicy};
use crate::routing::pattern::{PathPattern, WildcardPattern};
use crate::routing::route::{AuthPolicy, DispatchError, Route, RouteKind, TransportPolicy};

/// Ordered, immutable sequence of routes. First match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from descriptor entries, preserving declaration order.
    ///
    /// Entries are expected to have passed validation; anything still
    /// malformed is skipped with a warning rather than aborting the table.
    pub fn from_entries(entries: &[HandlerEntry]) -> Self {
        let routes: Vec<Route> = entries.iter().filter_map(compile_entry).collect();

        for (later, route) in routes.iter().enumerate() {
            if let Some(earlier) = routes[..later].iter().find(|r| shadows(r, route)) {
                tracing::warn!(
                    url = %route.url,
                    shadowed_by = %earlier.url,
                    "Route can never match; an earlier route covers every path it accepts"
                );
            }
        }

        Self { routes }
    }

    /// Resolve a normalized request path (no query string) to a route.
    ///
    /// Scans routes in declared order and returns the first whose pattern
    /// matches, after checking the route's transport and auth policy
    /// against the caller-asserted flags.
    pub fn resolve(
        &self,
        path: &str,
        is_secure: bool,
        is_admin: bool,
    ) -> Result<&Route, DispatchError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .ok_or_else(|| DispatchError::NotFound {
                path: path.to_string(),
            })?;

        if route.transport == TransportPolicy::SecureOnly && !is_secure {
            return Err(DispatchError::InsecureTransport {
                url: route.url.clone(),
            });
        }
        if route.auth == AuthPolicy::AdminOnly && !is_admin {
            return Err(DispatchError::Unauthorized {
                url: route.url.clone(),
            });
        }

        Ok(route)
    }

    /// All routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Compile one descriptor entry into a route.
///
/// The route kind decides how the url is matched: exact equality for
/// single files, prefix for directories, and wildcard for script urls
/// that declare one.
pub(crate) fn compile_entry(entry: &HandlerEntry) -> Option<Route> {
    let (kind, target) = if let Some(file) = &entry.static_files {
        (RouteKind::StaticFile, file.clone())
    } else if let Some(dir) = &entry.static_dir {
        (RouteKind::StaticDir, dir.clone())
    } else if let Some(script) = &entry.script {
        (RouteKind::Handler, script.clone())
    } else {
        tracing::warn!(url = %entry.url, "Skipping handler entry with no target");
        return None;
    };

    let pattern = match kind {
        RouteKind::StaticFile => PathPattern::Exact(entry.url.clone()),
        RouteKind::StaticDir => PathPattern::Prefix(entry.url.clone()),
        RouteKind::Handler if PathPattern::has_wildcard(&entry.url) => {
            PathPattern::Wildcard(WildcardPattern::compile(&entry.url))
        }
        RouteKind::Handler => PathPattern::Exact(entry.url.clone()),
    };

    Some(Route {
        url: entry.url.clone(),
        pattern,
        kind,
        target,
        auth: match entry.login {
            Some(LoginPolicy::Admin) => AuthPolicy::AdminOnly,
            None => AuthPolicy::None,
        },
        transport: match entry.secure {
            Some(SecurePolicy::Always) => TransportPolicy::SecureOnly,
            None => TransportPolicy::PlaintextAllowed,
        },
    })
}

/// Conservative check for whether `earlier` accepts every path `later`
/// accepts. Only prefix subsumption is detected; overlap without full
/// subsumption is legitimate first-match-wins configuration.
fn shadows(earlier: &Route, later: &Route) -> bool {
    let PathPattern::Prefix(prefix) = &earlier.pattern else {
        return false;
    };
    match &later.pattern {
        PathPattern::Exact(path) => path.starts_with(prefix),
        PathPattern::Prefix(other) => other.starts_with(prefix),
        PathPattern::Wildcard(_) => later.url.starts_with(prefix.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_entry(url: &str, file: &str) -> HandlerEntry {
        HandlerEntry {
            url: url.to_string(),
            static_files: Some(file.to_string()),
            upload: Some(file.to_string()),
            ..HandlerEntry::default()
        }
    }

    fn dir_entry(url: &str, dir: &str) -> HandlerEntry {
        HandlerEntry {
            url: url.to_string(),
            static_dir: Some(dir.to_string()),
            ..HandlerEntry::default()
        }
    }

    fn script_entry(url: &str, script: &str) -> HandlerEntry {
        HandlerEntry {
            url: url.to_string(),
            script: Some(script.to_string()),
            ..HandlerEntry::default()
        }
    }

    /// Route table mirroring a typical hosted-app descriptor: static
    /// assets first, then admin task endpoints, then a wildcard API route.
    fn sample_table() -> RouteTable {
        let mut index = file_entry("/", "templates/index.html");
        index.secure = Some(SecurePolicy::Always);

        let mut cron = script_entry("/crons/set_announcement", "main.set_announcement");
        cron.secure = Some(SecurePolicy::Always);
        cron.login = Some(LoginPolicy::Admin);

        let mut task = script_entry("/tasks/send_confirmation_email", "main.send_confirmation_email");
        task.secure = Some(SecurePolicy::Always);
        task.login = Some(LoginPolicy::Admin);

        let mut api = script_entry("/_ah/spi/.*", "conference.api");
        api.secure = Some(SecurePolicy::Always);

        RouteTable::from_entries(&[
            file_entry("/favicon.ico", "favicon.ico"),
            dir_entry("/js", "static/js"),
            index,
            cron,
            task,
            api,
        ])
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        let table = sample_table();
        let err = table.resolve("/no/such/path", true, true).unwrap_err();
        assert_eq!(
            err,
            DispatchError::NotFound {
                path: "/no/such/path".to_string()
            }
        );
    }

    #[test]
    fn test_static_file_route() {
        let table = sample_table();
        let route = table.resolve("/favicon.ico", false, false).unwrap();
        assert_eq!(route.kind, RouteKind::StaticFile);
        assert_eq!(route.target, "favicon.ico");
    }

    #[test]
    fn test_static_dir_route() {
        let table = sample_table();
        let route = table.resolve("/js/app.js", false, false).unwrap();
        assert_eq!(route.kind, RouteKind::StaticDir);
        assert_eq!(route.target, "static/js");
    }

    #[test]
    fn test_secure_only_root() {
        let table = sample_table();
        let err = table.resolve("/", false, false).unwrap_err();
        assert_eq!(
            err,
            DispatchError::InsecureTransport {
                url: "/".to_string()
            }
        );

        let route = table.resolve("/", true, false).unwrap();
        assert_eq!(route.target, "templates/index.html");
    }

    #[test]
    fn test_admin_only_cron_route() {
        let table = sample_table();
        let err = table.resolve("/crons/set_announcement", true, false).unwrap_err();
        assert_eq!(
            err,
            DispatchError::Unauthorized {
                url: "/crons/set_announcement".to_string()
            }
        );

        let route = table.resolve("/crons/set_announcement", true, true).unwrap();
        assert_eq!(route.kind, RouteKind::Handler);
        assert_eq!(route.target, "main.set_announcement");
    }

    #[test]
    fn test_wildcard_api_route_without_login() {
        let table = sample_table();
        let route = table
            .resolve("/_ah/spi/ConferenceApi.createConference", true, false)
            .unwrap();
        assert_eq!(route.kind, RouteKind::Handler);
        assert_eq!(route.target, "conference.api");
    }

    #[test]
    fn test_transport_checked_before_auth() {
        let table = sample_table();
        let err = table.resolve("/crons/set_announcement", false, false).unwrap_err();
        assert_eq!(
            err,
            DispatchError::InsecureTransport {
                url: "/crons/set_announcement".to_string()
            }
        );
    }

    #[test]
    fn test_first_match_wins_for_overlapping_routes() {
        let table = RouteTable::from_entries(&[
            script_entry("/api/v1.*", "handlers.v1"),
            script_entry("/api.*", "handlers.catch_all"),
        ]);

        let route = table.resolve("/api/v1/users", false, false).unwrap();
        assert_eq!(route.target, "handlers.v1");

        let route = table.resolve("/api/v2/users", false, false).unwrap();
        assert_eq!(route.target, "handlers.catch_all");
    }

    #[test]
    fn test_declaration_order_beats_specificity() {
        // The earlier, broader route wins even when a later route is a
        // tighter match.
        let table = RouteTable::from_entries(&[
            script_entry("/api.*", "handlers.catch_all"),
            script_entry("/api/v1.*", "handlers.v1"),
        ]);

        let route = table.resolve("/api/v1/users", false, false).unwrap();
        assert_eq!(route.target, "handlers.catch_all");
    }

    #[test]
    fn test_entry_without_target_is_skipped() {
        let entry = HandlerEntry {
            url: "/broken".to_string(),
            ..HandlerEntry::default()
        };
        let table = RouteTable::from_entries(&[entry]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_shadow_detection_is_conservative() {
        let dir = compile_entry(&dir_entry("/static", "static")).unwrap();
        let nested = compile_entry(&file_entry("/static/logo.png", "static/logo.png")).unwrap();
        let unrelated = compile_entry(&file_entry("/favicon.ico", "favicon.ico")).unwrap();

        assert!(shadows(&dir, &nested));
        assert!(!shadows(&dir, &unrelated));
        // Exact routes never subsume anything.
        assert!(!shadows(&unrelated, &dir));
    }
}
