//! # Views Module
//!
//! Page models and askama templates for the HTML site.
//!
//! Templates live under `templates/` at the crate root and are compiled into
//! the binary, so a missing view or partial is a build error rather than a
//! request-time failure.
//!
//! - `pages/page.html` renders a banner page (home, dogs, cats, fishes) or a
//!   search result list
//! - `pages/404.html` is the fallback for unknown paths
//! - `partials/header.html` carries the menu and the search form,
//!   `partials/footer.html` the page footer

mod page;
mod templates;

pub use page::{Banner, MenuState, Page};
pub use templates::{NotFoundTemplate, PageTemplate, PetCard};

use askama::Template;

use crate::catalog::PetCatalog;
use crate::query::SearchOutcome;

/// Render the listing page for `page`.
pub fn render_page(page: Page, catalog: &PetCatalog) -> askama::Result<String> {
    PageTemplate::for_page(page, catalog).render()
}

/// Render the search results page.
pub fn render_search(outcome: &SearchOutcome<'_>) -> askama::Result<String> {
    PageTemplate::for_search(outcome).render()
}

pub fn render_not_found() -> askama::Result<String> {
    NotFoundTemplate::default().render()
}
