//! Resolution tests against the shipped descriptor.
//!
//! Loads the real `frontdoor.toml` from the repository root and checks
//! the documented dispatch behavior end to end: descriptor → validation →
//! route table → resolve.

use std::path::PathBuf;

use frontdoor::config::load_descriptor;
use frontdoor::{DispatchError, RouteKind, RouteTable};

fn shipped_table() -> RouteTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontdoor.toml");
    let descriptor = load_descriptor(&path).expect("shipped descriptor must validate");
    RouteTable::from_entries(&descriptor.handlers)
}

#[test]
fn unmatched_paths_are_not_found() {
    let table = shipped_table();
    for path in ["/nope", "/crons", "/tasks/other", "/_ah/api/x"] {
        let err = table.resolve(path, true, true).unwrap_err();
        assert!(
            matches!(err, DispatchError::NotFound { .. }),
            "expected NotFound for {path}, got {err:?}"
        );
    }
}

#[test]
fn favicon_is_served_over_plaintext_to_anyone() {
    let table = shipped_table();
    let route = table.resolve("/favicon.ico", false, false).unwrap();
    assert_eq!(route.kind, RouteKind::StaticFile);
    assert_eq!(route.target, "favicon.ico");
}

#[test]
fn js_directory_route_matches_by_prefix() {
    let table = shipped_table();
    let route = table.resolve("/js/app.js", false, false).unwrap();
    assert_eq!(route.kind, RouteKind::StaticDir);
    assert_eq!(route.target, "static/js");
}

#[test]
fn root_requires_secure_transport() {
    let table = shipped_table();

    let err = table.resolve("/", false, false).unwrap_err();
    assert!(matches!(err, DispatchError::InsecureTransport { .. }));

    let route = table.resolve("/", true, false).unwrap();
    assert_eq!(route.kind, RouteKind::StaticFile);
    assert_eq!(route.target, "templates/index.html");
}

#[test]
fn cron_route_requires_admin() {
    let table = shipped_table();

    let err = table.resolve("/crons/set_announcement", true, false).unwrap_err();
    assert!(matches!(err, DispatchError::Unauthorized { .. }));

    let route = table.resolve("/crons/set_announcement", true, true).unwrap();
    assert_eq!(route.kind, RouteKind::Handler);
    assert_eq!(route.target, "main.set_announcement");
}

#[test]
fn task_route_requires_admin() {
    let table = shipped_table();

    let err = table
        .resolve("/tasks/send_confirmation_email", true, false)
        .unwrap_err();
    assert!(matches!(err, DispatchError::Unauthorized { .. }));

    let route = table
        .resolve("/tasks/send_confirmation_email", true, true)
        .unwrap();
    assert_eq!(route.target, "main.send_confirmation_email");
}

#[test]
fn wildcard_api_route_needs_no_login() {
    let table = shipped_table();
    let route = table
        .resolve("/_ah/spi/ConferenceApi.createConference", true, false)
        .unwrap();
    assert_eq!(route.kind, RouteKind::Handler);
    assert_eq!(route.target, "conference.api");
}

#[test]
fn resolution_is_pure_and_repeatable() {
    let table = shipped_table();
    let first = table.resolve("/js/app.js", false, false).unwrap().clone();
    for _ in 0..3 {
        assert_eq!(table.resolve("/js/app.js", false, false).unwrap(), &first);
    }
}
