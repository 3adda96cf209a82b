use crate::{
    dispatcher::Dispatcher,
    middleware::{MetricsMiddleware, TracingMiddleware},
    registry,
    router::{site_routes, Router},
    runtime_config::RuntimeConfig,
    server::{AppService, HttpServer},
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Server options for the pet catalog site.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "petshop", version)]
#[command(about = "Server-rendered pet catalog", long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory with CSS and images served under `/`
    #[arg(long, env = "PETSHOP_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Disable the `/metrics` endpoint and metrics middleware
    #[arg(long, default_value_t = false)]
    pub no_metrics: bool,
}

impl Cli {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Wire router, dispatcher, handlers and middleware into a service.
///
/// # Errors
///
/// Fails if the routing table does not compile.
pub fn build_service(public_dir: Option<PathBuf>, metrics: bool) -> anyhow::Result<AppService> {
    let router = Router::new(site_routes()).context("Failed to compile routing table")?;

    let mut dispatcher = Dispatcher::new();
    // SAFETY: register_all spawns may coroutines. The handlers own their
    // state and only reach shared data through the immutable catalog.
    unsafe {
        registry::register_all(&mut dispatcher);
    }
    dispatcher.add_middleware(Arc::new(TracingMiddleware));

    let metrics = metrics.then(|| Arc::new(MetricsMiddleware::new()));
    if let Some(m) = &metrics {
        dispatcher.add_middleware(Arc::clone(m));
    }

    let mut service = AppService::new(Arc::new(router), Arc::new(dispatcher), public_dir);
    if let Some(m) = metrics {
        service.set_metrics_middleware(m);
    }
    Ok(service)
}

/// Start the server and block until it is stopped.
///
/// On Unix, SIGINT or SIGTERM stops the server; elsewhere this joins the
/// server coroutine.
///
/// # Errors
///
/// Fails if the service cannot be built, the address cannot be bound, or
/// the server coroutine panics.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let runtime = RuntimeConfig::from_env();
    may::config().set_stack_size(runtime.stack_size);

    let public_dir = cli.public_dir.is_dir().then(|| cli.public_dir.clone());
    if public_dir.is_none() {
        tracing::warn!(
            public_dir = %cli.public_dir.display(),
            "Public directory missing, static files disabled"
        );
    }

    let service = build_service(public_dir, !cli.no_metrics)?;
    let addr = cli.addr();
    let handle = HttpServer(service)
        .start(addr.as_str())
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        addr = %handle.addr(),
        stack_size = runtime.stack_size,
        metrics = !cli.no_metrics,
        "Pet shop listening"
    );

    wait_for_shutdown(handle)
}

#[cfg(unix)]
fn wait_for_shutdown(handle: crate::server::ServerHandle) -> anyhow::Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("Failed to install signal handlers")?;
    if let Some(signal) = signals.forever().next() {
        info!(signal = signal, "Shutdown signal received");
    }
    handle.stop();
    info!("Server stopped");
    Ok(())
}

#[cfg(not(unix))]
fn wait_for_shutdown(handle: crate::server::ServerHandle) -> anyhow::Result<()> {
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("Server failed: {e:?}"))
}
