//! Site routing table resolution.

use http::Method;
use petshop::router::{site_routes, RouteMeta, Router, SEARCH_HANDLER};

fn router() -> Router {
    Router::new(site_routes()).unwrap()
}

fn handler(router: &Router, method: Method, path: &str) -> Option<String> {
    router.route(method, path).map(|m| m.handler_name)
}

#[test]
fn test_every_page_routes() {
    let r = router();
    let cases = [
        ("/", "home"),
        ("/dogs", "dogs"),
        ("/cats", "cats"),
        ("/fishes", "fishes"),
        ("/search", SEARCH_HANDLER),
    ];
    for (path, expected) in cases {
        assert_eq!(handler(&r, Method::GET, path).as_deref(), Some(expected), "{path}");
    }
}

#[test]
fn test_non_strict_matching() {
    let r = router();
    assert_eq!(handler(&r, Method::GET, "/Dogs/").as_deref(), Some("dogs"));
    assert_eq!(handler(&r, Method::GET, "/SEARCH").as_deref(), Some("search"));
}

#[test]
fn test_unknown_paths_and_methods() {
    let r = router();
    assert!(r.route(Method::GET, "/birds").is_none());
    assert!(r.route(Method::GET, "/dogs/1").is_none());
    assert!(r.route(Method::POST, "/dogs").is_none());
    assert!(r.route(Method::GET, "").is_none());
}

#[test]
fn test_match_carries_route_meta() {
    let r = router();
    let m = r.route(Method::GET, "/cats").unwrap();
    assert_eq!(m.route.path_pattern, "/cats");
    assert_eq!(m.route.method, Method::GET);
}

#[test]
fn test_first_registered_route_wins() {
    let r = Router::new(vec![
        RouteMeta::get("/dogs", "first"),
        RouteMeta::get("/dogs", "second"),
    ])
    .unwrap();
    assert_eq!(handler(&r, Method::GET, "/dogs").as_deref(), Some("first"));
    assert_eq!(r.routes().count(), 2);
}

#[test]
fn test_literal_paths_are_escaped() {
    let r = Router::new(vec![RouteMeta::get("/a.b", "dot")]).unwrap();
    assert!(r.route(Method::GET, "/a.b").is_some());
    assert!(r.route(Method::GET, "/axb").is_none());
}

#[test]
fn test_routes_listed_in_registration_order() {
    let r = router();
    let listed: Vec<_> = r.routes().map(|m| m.handler_name.as_str()).collect();
    let registered: Vec<_> = site_routes().into_iter().map(|m| m.handler_name).collect();
    assert_eq!(listed, registered);
    assert!(r.routes().all(|m| m.method == Method::GET));
}
