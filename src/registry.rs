use crate::dispatcher::Dispatcher;
use crate::handlers::{pages, search};
use crate::router::SEARCH_HANDLER;
use crate::views::Page;

/// Register every page handler under the name the router yields for it.
///
/// # Safety
///
/// Spawns coroutines through [`Dispatcher::register_handler`]; the `may`
/// runtime must be configured first.
pub unsafe fn register_all(dispatcher: &mut Dispatcher) {
    for page in Page::ALL {
        dispatcher.register_handler(page.slug(), move |req| pages::handler(page, req));
    }
    dispatcher.register_handler(SEARCH_HANDLER, search::handler);
}
