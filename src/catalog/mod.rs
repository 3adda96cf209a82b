//! # Catalog Module
//!
//! The catalog module owns the fixed list of pets shown by the site and the
//! read-only queries over it.
//!
//! ## Overview
//!
//! - [`PetRecord`] is an immutable value: category, picture, breed, color,
//!   sex and an optional given name.
//! - [`PetCatalog`] holds the records in display order (dogs, then cats, then
//!   fish) and exposes filtering operations that return borrowed
//!   subsequences. Filtering never re-sorts.
//! - [`PetCatalog::shared`] is the catalog the server uses. It is built once
//!   on first access and lives for the whole process.
//!
//! ## Matching rules
//!
//! Free-text fields (breed and color) match by case-insensitive substring.
//! Category and sex match by equality over closed enums, so an invalid
//! category cannot reach the store at all.
//!
//! An empty result is an ordinary outcome. The store logs a `warn!` for it so
//! operators can spot searches that never hit, but callers just get an empty
//! `Vec`.
//!
//! ## Example
//!
//! ```rust
//! use petshop::catalog::{Category, PetCatalog, PetFilter, Sex};
//!
//! let catalog = PetCatalog::shared();
//! let dogs = catalog.filtered(&PetFilter::default().category(Category::Dog));
//! assert_eq!(dogs.len(), 14);
//!
//! let honey = catalog.by_breed_and_sex("golden", Sex::Female);
//! assert_eq!(honey[0].name.as_deref(), Some("Honey"));
//! ```

mod data;
mod record;
mod store;

pub use record::{Category, ParseEnumError, PetRecord, Sex};
pub use store::{PetCatalog, PetFilter};
