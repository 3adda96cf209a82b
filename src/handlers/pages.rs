use crate::catalog::PetCatalog;
use crate::dispatcher::HandlerRequest;
use crate::views::{self, Page};

/// Render the banner page for `page` from the shared catalog.
pub fn handler(page: Page, req: HandlerRequest) {
    super::reply(&req, views::render_page(page, PetCatalog::shared()));
}
