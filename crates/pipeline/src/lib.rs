//! Directory filter engine for clubs, events and posts.
//!
//! This crate provides:
//! - `Entity`, implemented for the catalog's clubs, events and posts
//! - `Filter` trait and the two directory stages (search term, category)
//! - `FilterPipeline` for composing stages
//! - `FilterCriteria`, the value the directory's search box and selector produce
//!
//! ## Behaviour
//! Filtering is a pure function of `(entities, criteria)`:
//! 1. A non-blank search term keeps entities whose name or body contains it,
//!    ignoring case and surrounding whitespace
//! 2. A selected category keeps entities whose category id matches exactly
//! 3. Both apply together; input order is kept and nothing is copied or changed
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter, FilterCriteria};
//!
//! let criteria = FilterCriteria::new().with_search("club").with_category("all");
//! let clubs = filter(catalog.clubs(), &criteria);
//!
//! if clubs.is_empty() {
//!     println!("No Clubs Found");
//! }
//! ```

pub mod traits;
pub mod criteria;
pub mod filters;
pub mod filter_pipeline;
pub mod entities;

// Re-export main types
pub use traits::{Entity, Filter};
pub use criteria::{CategorySelection, FilterCriteria, MATCH_ALL};
pub use filter_pipeline::FilterPipeline;

/// Filter a borrowed collection, returning references in input order.
///
/// Empty input or criteria that match nothing give an empty vector; this
/// never fails.
pub fn filter<'a, E: Entity>(entities: &'a [E], criteria: &FilterCriteria) -> Vec<&'a E> {
    FilterPipeline::from_criteria(criteria).apply(entities.iter().collect())
}

/// Filter an owned collection, keeping the surviving entities in input order.
pub fn filter_owned<E: Entity>(entities: Vec<E>, criteria: &FilterCriteria) -> Vec<E> {
    FilterPipeline::from_criteria(criteria).apply(entities)
}
