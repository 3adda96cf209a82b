//! # Server Module
//!
//! HTTP front end built on `may_minihttp`.
//!
//! [`AppService`] answers `/health` and `/metrics` itself, serves files from
//! the public directory, and hands every routed page to the
//! [`Dispatcher`](crate::dispatcher::Dispatcher). Unrouted requests get the
//! HTML 404 page.
//!
//! [`HttpServer`] binds the service to an address and returns a
//! [`ServerHandle`] for readiness checks and shutdown.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use service::{health_endpoint, metrics_endpoint, not_found_endpoint, AppService};
