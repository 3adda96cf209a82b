//! # Dispatcher Module
//!
//! Coroutine-based handler dispatch.
//!
//! Every page handler runs in its own `may` coroutine and receives
//! [`HandlerRequest`]s over an MPSC channel. Each request carries a reply
//! channel on which the handler sends exactly one [`HandlerResponse`].
//!
//! ## Request Flow
//!
//! 1. The router matches a path and yields the handler name
//! 2. The dispatcher looks up the handler's channel and builds the request
//! 3. Middleware `before` hooks run (any of them may short-circuit)
//! 4. The request is sent to the handler coroutine and the reply awaited
//! 5. Middleware `after` hooks run and the response is returned
//!
//! ## Error Handling
//!
//! - Unknown handler names yield `None` (the server answers 500)
//! - Handler panics are caught inside the coroutine and answered with 500
//! - A closed reply channel is answered with 503
//!
//! Coroutine stack size comes from [`RuntimeConfig`](crate::runtime_config::RuntimeConfig).

mod core;

pub use core::{
    Dispatcher, HandlerRequest, HandlerResponse, HandlerSender, HeaderVec, ParamVec,
    MAX_INLINE_HEADERS, MAX_INLINE_PARAMS,
};
