//! Router core module - request path to handler name resolution.

use http::Method;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Static description of one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    pub method: Method,
    /// Literal path, e.g. `/dogs`
    pub path_pattern: String,
    /// Name the handler is registered under in the dispatcher
    pub handler_name: String,
}

impl RouteMeta {
    #[must_use]
    pub fn get(path: &str, handler_name: &str) -> Self {
        Self {
            method: Method::GET,
            path_pattern: path.to_string(),
            handler_name: handler_name.to_string(),
        }
    }
}

/// Result of successfully matching a request path to a route
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub route: Arc<RouteMeta>,
    /// Name of the handler that should process this request
    pub handler_name: String,
}

/// Router that matches HTTP requests to handlers.
///
/// Each route is compiled into an anchored, case-insensitive regex that also
/// accepts a single trailing slash, so `/Dogs/` reaches the same handler as
/// `/dogs`. Routes are tested in registration order.
#[derive(Clone)]
pub struct Router {
    routes: Vec<(Method, Regex, Arc<RouteMeta>)>,
}

impl Router {
    /// Compile the routing table.
    ///
    /// # Errors
    ///
    /// Returns an error if a path cannot be compiled into a regex.
    pub fn new(routes: Vec<RouteMeta>) -> Result<Self, regex::Error> {
        let routes = routes
            .into_iter()
            .map(|route| {
                let regex = Self::path_to_regex(&route.path_pattern)?;
                Ok((route.method.clone(), regex, Arc::new(route)))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let router = Self { routes };
        let routes_summary: Vec<String> = router
            .routes()
            .map(|meta| format!("{} {} -> {}", meta.method, meta.path_pattern, meta.handler_name))
            .collect();

        info!(
            routes_count = routes_summary.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Ok(router)
    }

    /// Match an HTTP request to a route.
    ///
    /// `path` must already have its query string removed.
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for (m, regex, route) in &self.routes {
            if *m != method {
                continue;
            }
            if regex.is_match(path) {
                debug!(
                    method = %method,
                    path = %path,
                    handler_name = %route.handler_name,
                    "Route matched"
                );
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    handler_name: route.handler_name.clone(),
                });
            }
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }

    /// All registered routes, in match order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteMeta> {
        self.routes.iter().map(|(_, _, meta)| meta.as_ref())
    }

    /// Convert a literal route path to its matching regex.
    ///
    /// `/` becomes `^/$`; any other path `/a/b` becomes `(?i)^/a/b/?$`.
    pub(crate) fn path_to_regex(path: &str) -> Result<Regex, regex::Error> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Regex::new(r"^/$");
        }

        let mut pattern = String::with_capacity(trimmed.len() + 10);
        pattern.push_str("(?i)^");
        for segment in trimmed.split('/').filter(|s| !s.is_empty()) {
            pattern.push('/');
            pattern.push_str(&regex::escape(segment));
        }
        pattern.push_str("/?$");
        Regex::new(&pattern)
    }
}
