//! # Handlers
//!
//! Page controllers. Each runs inside a dispatcher coroutine, renders one
//! askama view and sends exactly one [`HandlerResponse`] back on the
//! request's reply channel.
//!
//! | Handler  | View                                  |
//! |----------|---------------------------------------|
//! | `home`   | banner page, every pet                |
//! | `dogs`   | banner page, dogs only                |
//! | `cats`   | banner page, cats only                |
//! | `fishes` | banner page, fish only                |
//! | `search` | result list for `q`/`sex`/`type`/`color` |

pub mod pages;
pub mod search;

use tracing::{debug, error};

use crate::dispatcher::{HandlerRequest, HandlerResponse};

/// Send a rendered page, or a 500 if rendering failed.
pub(crate) fn reply(req: &HandlerRequest, rendered: askama::Result<String>) {
    let response = match rendered {
        Ok(body) => HandlerResponse::html(200, body),
        Err(e) => {
            error!(
                request_id = %req.request_id,
                handler = %req.handler_name,
                error = %e,
                "Template rendering failed"
            );
            HandlerResponse::error(500, "Internal Server Error")
        }
    };
    if req.reply_tx.send(response).is_err() {
        // The dispatcher stopped waiting; nobody is left to answer.
        debug!(request_id = %req.request_id, "Reply channel closed");
    }
}
