use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use super::Middleware;
use crate::dispatcher::{HandlerRequest, HandlerResponse};

/// Middleware for collecting Prometheus-compatible metrics
#[derive(Default)]
pub struct MetricsMiddleware {
    request_count: AtomicUsize,
    total_latency_ns: AtomicU64,
    error_responses: AtomicUsize,
    stack_size: AtomicUsize,
    top_level_requests: AtomicUsize,
}

impl MetricsMiddleware {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of dispatched requests
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Dispatched requests answered with a 4xx or 5xx status
    pub fn error_responses(&self) -> usize {
        self.error_responses.load(Ordering::Relaxed)
    }

    /// Mean handler latency; zero before the first request.
    pub fn average_latency(&self) -> Duration {
        let count = self.request_count.load(Ordering::Relaxed) as u64;
        if count == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(self.total_latency_ns.load(Ordering::Relaxed) / count)
        }
    }

    /// Stack size of the last coroutine that served a request
    pub fn stack_size(&self) -> usize {
        self.stack_size.load(Ordering::Relaxed)
    }

    /// Count a request served outside the dispatcher (`/health`,
    /// `/metrics`, static files, the 404 page).
    pub fn inc_top_level_request(&self) {
        self.top_level_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn top_level_request_count(&self) -> usize {
        self.top_level_requests.load(Ordering::Relaxed)
    }

    /// Prometheus text exposition of all counters.
    #[must_use]
    pub fn render_prometheus(&self) -> String {
        format!(
            "# HELP petshop_requests_total Total number of dispatched requests\n\
             # TYPE petshop_requests_total counter\n\
             petshop_requests_total {}\n\
             # HELP petshop_error_responses_total Dispatched requests answered with status >= 400\n\
             # TYPE petshop_error_responses_total counter\n\
             petshop_error_responses_total {}\n\
             # HELP petshop_top_level_requests_total Requests served outside the dispatcher\n\
             # TYPE petshop_top_level_requests_total counter\n\
             petshop_top_level_requests_total {}\n\
             # HELP petshop_request_latency_seconds Average request latency in seconds\n\
             # TYPE petshop_request_latency_seconds gauge\n\
             petshop_request_latency_seconds {}\n\
             # HELP petshop_coroutine_stack_bytes Configured coroutine stack size\n\
             # TYPE petshop_coroutine_stack_bytes gauge\n\
             petshop_coroutine_stack_bytes {}\n",
            self.request_count(),
            self.error_responses(),
            self.top_level_request_count(),
            self.average_latency().as_secs_f64(),
            self.stack_size(),
        )
    }
}

impl Middleware for MetricsMiddleware {
    fn before(&self, _req: &HandlerRequest) -> Option<HandlerResponse> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn after(&self, _req: &HandlerRequest, res: &mut HandlerResponse, latency: Duration) {
        self.total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
        if res.status >= 400 {
            self.error_responses.fetch_add(1, Ordering::Relaxed);
        }
        let size = if may::coroutine::is_coroutine() {
            may::coroutine::current().stack_size()
        } else {
            may::config().get_stack_size()
        };
        self.stack_size.store(size, Ordering::Relaxed);
    }
}
