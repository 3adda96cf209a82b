use super::request::{parse_request, ParsedRequest};
use super::response::{write_bytes, write_handler_response, write_json};
use crate::dispatcher::Dispatcher;
use crate::middleware::MetricsMiddleware;
use crate::router::Router;
use crate::static_files::StaticFiles;
use crate::views;
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};

/// The site's `may_minihttp` service.
///
/// Request order: `/health`, `/metrics`, static assets, routed pages, and
/// finally the 404 page.
#[derive(Clone)]
pub struct AppService {
    pub router: Arc<Router>,
    pub dispatcher: Arc<Dispatcher>,
    pub metrics: Option<Arc<MetricsMiddleware>>,
    pub static_files: Option<StaticFiles>,
}

impl AppService {
    pub fn new(
        router: Arc<Router>,
        dispatcher: Arc<Dispatcher>,
        static_dir: Option<PathBuf>,
    ) -> Self {
        let static_files = static_dir.map(StaticFiles::new);
        if let Some(sf) = &static_files {
            debug!(base_dir = %sf.base_dir().display(), "Static files enabled");
        }
        Self {
            router,
            dispatcher,
            metrics: None,
            static_files,
        }
    }

    /// Expose `metrics` on `/metrics` and count top-level requests in it.
    pub fn set_metrics_middleware(&mut self, metrics: Arc<MetricsMiddleware>) {
        self.metrics = Some(metrics);
    }

    fn count_top_level(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.inc_top_level_request();
        }
    }

    fn serve_static(&self, path: &str, res: &mut Response) -> bool {
        let Some(sf) = &self.static_files else {
            return false;
        };
        let p = path.trim_start_matches('/');
        if p.is_empty() {
            return false;
        }
        match sf.load(p) {
            Ok((bytes, ct)) => {
                debug!(path = %path, content_type = ct, bytes = bytes.len(), "Static file served");
                write_bytes(res, 200, ct, bytes);
                true
            }
            Err(_) => false,
        }
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
pub fn health_endpoint(res: &mut Response) -> io::Result<()> {
    write_json(res, 200, &json!({ "status": "ok" }));
    Ok(())
}

/// Metrics endpoint returning Prometheus text format statistics.
pub fn metrics_endpoint(res: &mut Response, metrics: &MetricsMiddleware) -> io::Result<()> {
    write_bytes(
        res,
        200,
        "text/plain; version=0.0.4",
        metrics.render_prometheus().into_bytes(),
    );
    Ok(())
}

/// The HTML 404 page, or a plain 500 if it cannot be rendered.
pub fn not_found_endpoint(res: &mut Response, method: &str, path: &str) -> io::Result<()> {
    debug!(method = %method, path = %path, "Serving 404 page");
    match views::render_not_found() {
        Ok(body) => write_bytes(res, 404, "text/html; charset=utf-8", body.into_bytes()),
        Err(e) => {
            error!(error = %e, "404 page failed to render");
            write_bytes(
                res,
                500,
                "text/plain; charset=utf-8",
                b"Internal Server Error".to_vec(),
            );
        }
    }
    Ok(())
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest {
            method,
            path,
            headers,
            query_params,
        } = parse_request(req);

        let is_get = method == "GET";
        if is_get && path == "/health" {
            self.count_top_level();
            return health_endpoint(res);
        }
        if is_get && path == "/metrics" {
            if let Some(metrics) = &self.metrics {
                metrics.inc_top_level_request();
                return metrics_endpoint(res, metrics);
            }
        }
        if is_get && self.serve_static(&path, res) {
            self.count_top_level();
            return Ok(());
        }

        let route_match = Method::from_bytes(method.as_bytes())
            .ok()
            .and_then(|m| self.router.route(m, &path));

        let Some(route_match) = route_match else {
            self.count_top_level();
            return not_found_endpoint(res, &method, &path);
        };

        match self
            .dispatcher
            .dispatch(route_match, path.clone(), query_params, headers)
        {
            Some(hr) => write_handler_response(res, hr),
            None => {
                error!(method = %method, path = %path, "Handler failed or not registered");
                write_bytes(
                    res,
                    500,
                    "text/plain; charset=utf-8",
                    b"Internal Server Error".to_vec(),
                );
            }
        }
        Ok(())
    }
}
