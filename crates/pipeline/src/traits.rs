//! Core traits for the directory filter engine.
//!
//! `Entity` is what gets filtered, `Filter` is one stage that decides
//! whether an entity stays.

/// A record that can be searched and narrowed by category.
///
/// Clubs, events and posts all expose a display name, a free-text body
/// and at most one categorical identifier.
pub trait Entity {
    /// Display name or title
    fn name(&self) -> &str;

    /// Description or content body
    fn body(&self) -> &str;

    /// Categorical identifier compared by the category stage, if any
    fn category_id(&self) -> Option<&str>;
}

impl<T: Entity + ?Sized> Entity for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn body(&self) -> &str {
        (**self).body()
    }

    fn category_id(&self) -> Option<&str> {
        (**self).category_id()
    }
}

/// One stage of a [`FilterPipeline`](crate::FilterPipeline).
///
/// ## Design Note
/// - `Send + Sync` so a pipeline can be shared across threads
/// - Stages only look at entities; they never own or change them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `entity` passes this stage
    fn retains(&self, entity: &dyn Entity) -> bool;
}
