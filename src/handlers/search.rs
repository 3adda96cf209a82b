use tracing::debug;

use crate::catalog::PetCatalog;
use crate::dispatcher::HandlerRequest;
use crate::query::{resolve, SearchParams};
use crate::views;

/// Resolve the query string against the shared catalog and render the
/// result list.
pub fn handler(req: HandlerRequest) {
    let params = SearchParams::from_lookup(|name| req.get_query_param(name));
    let outcome = resolve(PetCatalog::shared(), &params);
    debug!(
        request_id = %req.request_id,
        params = ?params,
        results = outcome.pets.len(),
        "Search resolved"
    );
    super::reply(&req, views::render_search(&outcome));
}
