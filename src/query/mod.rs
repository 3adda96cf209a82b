//! # Query Module
//!
//! Turns the optional search parameters of a request into a single call
//! against the [`PetCatalog`](crate::catalog::PetCatalog).
//!
//! Raw input ([`SearchParams`]) is normalized into [`SearchCriteria`]: text
//! is trimmed, blank values become absent, and unknown sex or category tokens
//! are dropped. [`resolve`] then picks the cheapest store query that covers
//! the criteria and returns the matches together with a [`SearchState`] the
//! page uses to re-fill its form.
//!
//! Zero results and all results are both ordinary outcomes.

mod resolver;

pub use resolver::{
    resolve, resolve_criteria, SearchCriteria, SearchOutcome, SearchParams, SearchState,
};
