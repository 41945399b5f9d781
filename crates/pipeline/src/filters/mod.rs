//! Filter implementations for the directory pipeline.
//!
//! The directory applies two stages, in this order:
//! 1. `SearchTermFilter` - free-text match on name and body
//! 2. `CategoryFilter` - exact match on the categorical id

pub mod category;
pub mod search_term;

// Re-export for convenience
pub use category::CategoryFilter;
pub use search_term::SearchTermFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::traits::Entity;

    /// Minimal entity for filter unit tests
    #[derive(Debug, Clone, PartialEq)]
    pub struct Card {
        pub name: &'static str,
        pub body: &'static str,
        pub category: Option<&'static str>,
    }

    impl Entity for Card {
        fn name(&self) -> &str {
            self.name
        }

        fn body(&self) -> &str {
            self.body
        }

        fn category_id(&self) -> Option<&str> {
            self.category
        }
    }

    pub fn card(name: &'static str, body: &'static str, category: &'static str) -> Card {
        Card {
            name,
            body,
            category: Some(category),
        }
    }
}
