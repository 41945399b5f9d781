//! Filter criteria as a plain value.
//!
//! The directory pages keep a search box and a category selector; this
//! module turns their values into something the pipeline can consume.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Selector value meaning "no category filter"
pub const MATCH_ALL: &str = "all";

/// The category/type selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    /// No category filter
    #[default]
    All,
    /// Keep entities whose categorical id equals this one exactly
    Only(String),
}

impl CategorySelection {
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// The selected id, or `None` for [`CategorySelection::All`]
    pub fn id(&self) -> Option<&str> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Only(id) => Some(id),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = Infallible;

    /// `"all"` selects everything; any other string is an exact id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        if s == MATCH_ALL {
            CategorySelection::All
        } else {
            CategorySelection::Only(s.to_string())
        }
    }
}

impl From<String> for CategorySelection {
    fn from(s: String) -> Self {
        CategorySelection::from(s.as_str())
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str(MATCH_ALL),
            CategorySelection::Only(id) => f.write_str(id),
        }
    }
}

/// Search term plus category selection.
///
/// Two criteria are equal when their fields are equal. The search term is
/// stored as typed; trimming and case folding happen when it is matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub category: CategorySelection,
}

impl FilterCriteria {
    /// Criteria that match everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategorySelection>) -> Self {
        self.category = category.into();
        self
    }

    /// Reset both dimensions, like the directory's "Clear Filters" button
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.category = CategorySelection::All;
    }

    /// Trimmed, lower-cased search term; `None` when there is nothing to search for
    pub fn normalized_term(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Whether any dimension narrows the result
    pub fn is_active(&self) -> bool {
        self.normalized_term().is_some() || !self.category.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_sentinel() {
        assert_eq!(CategorySelection::from("all"), CategorySelection::All);
        assert_eq!(
            CategorySelection::from("All"),
            CategorySelection::Only("All".to_string())
        );
        assert_eq!("5".parse::<CategorySelection>().unwrap().id(), Some("5"));
        assert_eq!(CategorySelection::All.to_string(), "all");
    }

    #[test]
    fn test_normalized_term() {
        let criteria = FilterCriteria::new().with_search("  Coding CLUB ");
        assert_eq!(criteria.normalized_term().as_deref(), Some("coding club"));

        let blank = FilterCriteria::new().with_search(" \t\n ");
        assert_eq!(blank.normalized_term(), None);
        assert!(!blank.is_active());
    }

    #[test]
    fn test_structural_equality() {
        let a = FilterCriteria::new().with_search("club").with_category("5");
        let b = FilterCriteria {
            search_term: "club".to_string(),
            category: CategorySelection::Only("5".to_string()),
        };
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_category("all"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut criteria = FilterCriteria::new().with_search("debate").with_category("1");
        assert!(criteria.is_active());

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::new());
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_serde_shape() {
        let criteria = FilterCriteria::new().with_search("club").with_category("5");
        let json = serde_json::to_string(&criteria).unwrap();
        assert_eq!(json, r#"{"search_term":"club","category":{"only":"5"}}"#);

        let back: FilterCriteria = serde_json::from_str(r#"{"category":"all"}"#).unwrap();
        assert_eq!(back, FilterCriteria::new());
    }
}
