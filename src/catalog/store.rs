use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::data;
use super::record::{Category, PetRecord, Sex};

static SHARED: Lazy<PetCatalog> = Lazy::new(|| {
    let catalog = PetCatalog::from_records(data::seed());
    debug!(records = catalog.len(), "Pet catalog initialized");
    catalog
});

/// Optional structured criteria for [`PetCatalog::filtered`].
///
/// A record passes when every criterion that is `Some` matches; `None`
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub category: Option<Category>,
    pub sex: Option<Sex>,
    /// Case-insensitive substring of the color
    pub color: Option<String>,
}

impl PetFilter {
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.sex.is_none() && self.color.is_none()
    }

    fn matcher(&self) -> impl Fn(&PetRecord) -> bool + '_ {
        let color = self.color.as_deref().map(str::to_lowercase);
        move |pet: &PetRecord| {
            self.category.is_none_or(|c| pet.category == c)
                && self.sex.is_none_or(|s| pet.sex == s)
                && color.as_deref().is_none_or(|c| pet.color_contains(c))
        }
    }
}

/// Immutable, ordered collection of pets.
///
/// Every query returns a subsequence borrowed from the catalog, in insertion
/// order. Nothing here mutates the records, so a single instance can be read
/// from any number of coroutines at once.
#[derive(Debug, Clone)]
pub struct PetCatalog {
    records: Vec<PetRecord>,
}

impl PetCatalog {
    /// The catalog shipped with the site, built on first use.
    #[must_use]
    pub fn shared() -> &'static PetCatalog {
        &SHARED
    }

    #[must_use]
    pub fn from_records(records: Vec<PetRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in display order.
    #[must_use]
    pub fn all(&self) -> Vec<&PetRecord> {
        self.records.iter().collect()
    }

    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&PetRecord> {
        self.records
            .iter()
            .filter(|pet| pet.category == category)
            .collect()
    }

    /// Records whose breed contains `text`, ignoring case. Empty `text`
    /// matches every record.
    #[must_use]
    pub fn by_breed(&self, text: &str) -> Vec<&PetRecord> {
        let needle = text.to_lowercase();
        let results: Vec<&PetRecord> = self
            .records
            .iter()
            .filter(|pet| pet.breed_contains(&needle))
            .collect();

        if results.is_empty() {
            warn!(breed = %text, "No pets found for breed");
        }
        results
    }

    #[must_use]
    pub fn by_breed_and_sex(&self, text: &str, sex: Sex) -> Vec<&PetRecord> {
        let needle = text.to_lowercase();
        let results: Vec<&PetRecord> = self
            .records
            .iter()
            .filter(|pet| pet.breed_contains(&needle) && pet.sex == sex)
            .collect();

        if results.is_empty() {
            warn!(breed = %text, sex = %sex, "No pets found for breed and sex");
        }
        results
    }

    /// Conjunctive filter over the criteria present in `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &PetFilter) -> Vec<&PetRecord> {
        let matches = filter.matcher();
        let results: Vec<&PetRecord> = self.records.iter().filter(|pet| matches(pet)).collect();

        if results.is_empty() {
            warn!(filter = ?filter, "No pets found for filter");
        }
        results
    }
}
