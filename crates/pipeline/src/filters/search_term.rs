//! Free-text search over name and body.

use crate::traits::{Entity, Filter};

/// Keeps entities whose name or body contains the search term.
///
/// ## Algorithm
/// 1. Trim the term; a blank term keeps everything
/// 2. Lower-case the term once, up front
/// 3. Keep an entity when the lower-cased name OR the lower-cased body
///    contains the term as a substring
pub struct SearchTermFilter {
    /// `None` when the term was blank
    needle: Option<String>,
}

impl SearchTermFilter {
    /// Create a new SearchTermFilter from the raw search box value.
    pub fn new(term: &str) -> Self {
        let trimmed = term.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    /// Whether this stage narrows anything
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn retains(&self, entity: &dyn Entity) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                entity.name().to_lowercase().contains(needle.as_str())
                    || entity.body().to_lowercase().contains(needle.as_str())
            }
        }
    }
}
