//! The FilterPipeline chains filter stages.
//!
//! Stages are ANDed: an entity must pass every stage to survive. The
//! pipeline never reorders, duplicates or changes entities, and keeps no
//! state between calls.

use crate::criteria::FilterCriteria;
use crate::filters::{CategoryFilter, SearchTermFilter};
use crate::traits::{Entity, Filter};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchTermFilter::new("club"))
///     .add_filter(CategoryFilter::new("5"));
///
/// let filtered = pipeline.apply(catalog.clubs().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the directory pipeline for a set of criteria.
    ///
    /// Inactive dimensions (blank term, `All` category) add no stage, so
    /// criteria that match everything produce an empty pipeline.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        let search = SearchTermFilter::new(&criteria.search_term);
        if search.is_active() {
            pipeline = pipeline.add_filter(search);
        }

        let category = CategoryFilter::new(criteria.category.clone());
        if category.is_active() {
            pipeline = pipeline.add_filter(category);
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the stages, in order
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Whether `entity` passes every stage
    pub fn retains(&self, entity: &dyn Entity) -> bool {
        self.filters.iter().all(|f| f.retains(entity))
    }

    /// Apply all filters in sequence to the entities.
    ///
    /// ## Algorithm
    /// 1. Start with the input entities
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Keep the entities the filter retains
    ///    c. Log output count
    /// 3. Return what is left, in input order
    pub fn apply<E: Entity>(&self, entities: Vec<E>) -> Vec<E> {
        let mut current = entities;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|entity| filter.retains(entity));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
