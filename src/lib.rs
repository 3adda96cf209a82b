//! # petshop
//!
//! A server-rendered pet catalog: a fixed list of dogs, cats and fish shown
//! as banner pages per category, plus a search page that filters by breed
//! text, sex, category and color.
//!
//! ## Architecture
//!
//! - **[`catalog`]** - The immutable pet list and its filter queries
//! - **[`query`]** - Normalizes search input and picks the catalog query
//! - **[`views`]** - Page models and askama templates
//! - **[`router`]** - Path to handler-name resolution
//! - **[`dispatcher`]** - Coroutine-based handler dispatch
//! - **[`handlers`]** - Page and search controllers
//! - **[`middleware`]** - Tracing and metrics hooks around dispatch
//! - **[`server`]** - HTTP service built on `may_minihttp`
//! - **[`static_files`]** - CSS and images from the public directory
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as server::AppService
//!     participant Router as router::Router
//!     participant Disp as dispatcher::Dispatcher
//!     participant Handler as handler coroutine
//!     participant Query as query::resolve
//!     participant View as views
//!
//!     Client->>Server: GET /search?q=poodle&sex=Masculino
//!     Server->>Router: route(GET, "/search")
//!     Router-->>Server: RouteMatch("search")
//!     Server->>Disp: dispatch(route_match, query params, headers)
//!     Disp->>Handler: HandlerRequest (mpsc)
//!     Handler->>Query: resolve(catalog, params)
//!     Query-->>Handler: SearchOutcome
//!     Handler->>View: render_search(outcome)
//!     View-->>Handler: HTML
//!     Handler-->>Disp: HandlerResponse (reply channel)
//!     Disp-->>Server: HandlerResponse
//!     Server-->>Client: 200 text/html
//! ```
//!
//! ## Runtime Considerations
//!
//! Handlers run in `may` coroutines, not tokio tasks. Coroutine stack size
//! is set with `PETSHOP_STACK_SIZE`, see [`runtime_config`].
//!
//! ## Quick Start
//!
//! ```bash
//! PETSHOP_LOG_FORMAT=pretty cargo run -- --port 3000
//! curl 'http://localhost:3000/search?q=golden&sex=Feminino'
//! ```

pub mod catalog;
pub mod cli;
pub mod dispatcher;
pub mod handlers;
pub mod ids;
pub mod logging;
pub mod middleware;
pub mod query;
pub mod registry;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod static_files;
pub mod views;
