use serde::Serialize;
use tracing::debug;

use crate::catalog::{Category, PetCatalog, PetFilter, PetRecord, Sex};

/// Raw search input as extracted from a request, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Breed-name text typed by the visitor (`q`)
    pub text: Option<String>,
    /// Sex selector (`sex`), expected to be `Masculino` or `Feminino`
    pub sex: Option<String>,
    /// Category selector (`type`), expected to be `dog`, `cat` or `fish`
    pub category: Option<String>,
    /// Color text (`color`)
    pub color: Option<String>,
}

impl SearchParams {
    /// Build params from a query-string lookup function.
    pub fn from_lookup<'a, F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Self {
            text: get("q").map(str::to_string),
            sex: get("sex").map(str::to_string),
            category: get("type").map(str::to_string),
            color: get("color").map(str::to_string),
        }
    }

    /// Trim free text and parse enum selectors.
    ///
    /// Blank text becomes "no filter". Selectors that do not name a known
    /// value are dropped rather than rejected.
    #[must_use]
    pub fn normalize(&self) -> SearchCriteria {
        let text = non_blank(self.text.as_deref());
        let color = non_blank(self.color.as_deref());

        let sex = self.sex.as_deref().and_then(|raw| {
            if raw.trim().is_empty() {
                return None;
            }
            raw.parse::<Sex>()
                .map_err(|e| debug!(error = %e, "Ignoring sex selector"))
                .ok()
        });

        let category = self.category.as_deref().and_then(|raw| {
            if raw.trim().is_empty() {
                return None;
            }
            raw.parse::<Category>()
                .map_err(|e| debug!(error = %e, "Ignoring category selector"))
                .ok()
        });

        SearchCriteria {
            text,
            sex,
            category,
            color,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalized search input. Every field is either a usable value or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub text: Option<String>,
    pub sex: Option<Sex>,
    pub category: Option<Category>,
    pub color: Option<String>,
}

impl SearchCriteria {
    /// The structured part of the criteria, as understood by the store.
    #[must_use]
    pub fn structured(&self) -> PetFilter {
        PetFilter {
            category: self.category,
            sex: self.sex,
            color: self.color.clone(),
        }
    }

    #[must_use]
    pub fn has_structured(&self) -> bool {
        !self.structured().is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && !self.has_structured()
    }

    /// Echo of the criteria for the presentation layer.
    #[must_use]
    pub fn state(&self) -> SearchState {
        SearchState {
            query: self.text.clone().unwrap_or_default(),
            sex: self.sex,
            category: self.category,
            color: self.color.clone().unwrap_or_default(),
            is_male: self.sex == Some(Sex::Male),
            is_female: self.sex == Some(Sex::Female),
        }
    }
}

/// Search input echoed back to the page so form controls keep their values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Trimmed text query, empty when none was given
    pub query: String,
    pub sex: Option<Sex>,
    pub category: Option<Category>,
    pub color: String,
    pub is_male: bool,
    pub is_female: bool,
}

/// Matching pets plus the normalized search state.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub pets: Vec<&'a PetRecord>,
    pub state: SearchState,
}

/// Resolve raw search parameters against the catalog.
///
/// - nothing given: the whole catalog;
/// - text only: breed substring match;
/// - any structured filter: [`PetCatalog::filtered`], then narrowed by the
///   breed text when one was also given.
pub fn resolve<'a>(catalog: &'a PetCatalog, params: &SearchParams) -> SearchOutcome<'a> {
    let criteria = params.normalize();
    let pets = resolve_criteria(catalog, &criteria);

    SearchOutcome {
        pets,
        state: criteria.state(),
    }
}

/// Resolution over already normalized criteria.
#[must_use]
pub fn resolve_criteria<'a>(
    catalog: &'a PetCatalog,
    criteria: &SearchCriteria,
) -> Vec<&'a PetRecord> {
    if criteria.is_empty() {
        return catalog.all();
    }

    if !criteria.has_structured() {
        // is_empty() above guarantees the text is present here
        return catalog.by_breed(criteria.text.as_deref().unwrap_or_default());
    }

    let mut pets = catalog.filtered(&criteria.structured());
    if let Some(text) = criteria.text.as_deref() {
        let needle = text.to_lowercase();
        pets.retain(|pet| pet.breed_contains(&needle));
    }
    pets
}
