//! # CLI Module
//!
//! Command-line entry point of the `petshop` binary.
//!
//! ```bash
//! petshop --host 127.0.0.1 --port 8080 --public-dir ./public
//! ```
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--host` | `HOST` | `0.0.0.0` |
//! | `--port` | `PORT` | `3000` |
//! | `--public-dir` | `PETSHOP_PUBLIC_DIR` | `public` |
//! | `--no-metrics` | | metrics on |
//!
//! Logging and coroutine settings come from the environment, see
//! [`logging`](crate::logging) and [`runtime_config`](crate::runtime_config).

mod commands;


pub use commands::{build_service, run_cli, Cli};
