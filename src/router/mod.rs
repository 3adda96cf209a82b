//! # Router Module
//!
//! Maps an HTTP method and path to the name of the handler that renders the
//! page.
//!
//! ## Routing table
//!
//! | Method | Path      | Handler  |
//! |--------|-----------|----------|
//! | GET    | `/`       | `home`   |
//! | GET    | `/dogs`   | `dogs`   |
//! | GET    | `/cats`   | `cats`   |
//! | GET    | `/fishes` | `fishes` |
//! | GET    | `/search` | `search` |
//!
//! Matching ignores case and one trailing slash. A request that matches no
//! route yields `None`; the server answers it with the 404 page.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use petshop::router::{site_routes, Router};
//!
//! let router = Router::new(site_routes()).unwrap();
//! let m = router.route(Method::GET, "/dogs/").unwrap();
//! assert_eq!(m.handler_name, "dogs");
//! assert!(router.route(Method::GET, "/birds").is_none());
//! ```

mod core;

pub use core::{RouteMatch, RouteMeta, Router};

use crate::views::Page;

/// Handler name of the search route.
pub const SEARCH_HANDLER: &str = "search";

/// Routes served by the site: one per banner page plus the search.
#[must_use]
pub fn site_routes() -> Vec<RouteMeta> {
    let mut routes: Vec<RouteMeta> = Page::ALL
        .iter()
        .map(|page| {
            let path = match page {
                Page::Home => "/".to_string(),
                other => format!("/{}", other.slug()),
            };
            RouteMeta::get(&path, page.slug())
        })
        .collect();
    routes.push(RouteMeta::get("/search", SEARCH_HANDLER));
    routes
}
