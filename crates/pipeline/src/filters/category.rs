//! Exact match on the categorical identifier.

use crate::criteria::CategorySelection;
use crate::traits::{Entity, Filter};

/// Keeps entities whose category id equals the selected one.
///
/// Comparison is exact and case-sensitive. An entity without a category
/// only passes when the selection is [`CategorySelection::All`]. Selecting
/// an id no entity carries is not an error; it just keeps nothing.
pub struct CategoryFilter {
    selection: CategorySelection,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// # Arguments
    /// * `selection` - Selector value; `"all"` converts to [`CategorySelection::All`]
    pub fn new(selection: impl Into<CategorySelection>) -> Self {
        Self {
            selection: selection.into(),
        }
    }

    /// Whether this stage narrows anything
    pub fn is_active(&self) -> bool {
        !self.selection.is_all()
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn retains(&self, entity: &dyn Entity) -> bool {
        match self.selection.id() {
            None => true,
            Some(wanted) => entity.category_id() == Some(wanted),
        }
    }
}
