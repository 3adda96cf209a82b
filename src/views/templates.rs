use askama::Template;

use super::page::{Banner, MenuState, Page};
use crate::catalog::{PetCatalog, PetRecord};
use crate::query::{SearchOutcome, SearchState};

/// Display-ready projection of a [`PetRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCard {
    pub image: String,
    pub breed: String,
    pub color: String,
    pub sex: &'static str,
    /// Given name, empty when the record has none
    pub name: String,
}

impl From<&PetRecord> for PetCard {
    fn from(pet: &PetRecord) -> Self {
        Self {
            image: format!("images/{}", pet.image),
            breed: pet.breed.clone(),
            color: pet.color.clone(),
            sex: pet.sex.label(),
            name: pet.name.clone().unwrap_or_default(),
        }
    }
}

/// The listing page shared by the category pages and the search results.
#[derive(Template)]
#[template(path = "pages/page.html")]
pub struct PageTemplate {
    pub banner: Option<Banner>,
    pub menu: MenuState,
    pub pets: Vec<PetCard>,
    pub search: SearchState,
}

impl PageTemplate {
    /// Banner page listing the pets of `page`'s category.
    #[must_use]
    pub fn for_page(page: Page, catalog: &PetCatalog) -> Self {
        let pets = match page.category() {
            Some(category) => catalog.by_category(category),
            None => catalog.all(),
        };
        Self {
            banner: Some(page.banner()),
            menu: page.menu(),
            pets: cards(&pets),
            search: SearchState::default(),
        }
    }

    /// Search results. The home entry stays highlighted and no banner is shown.
    #[must_use]
    pub fn for_search(outcome: &SearchOutcome<'_>) -> Self {
        Self {
            banner: None,
            menu: Page::Home.menu(),
            pets: cards(&outcome.pets),
            search: outcome.state.clone(),
        }
    }
}

fn cards(pets: &[&PetRecord]) -> Vec<PetCard> {
    pets.iter().map(|pet| PetCard::from(*pet)).collect()
}

#[derive(Template, Default)]
#[template(path = "pages/404.html")]
pub struct NotFoundTemplate {
    pub menu: MenuState,
    pub search: SearchState,
}
