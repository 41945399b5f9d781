//! `Entity` for the catalog record types.
//!
//! | record | name    | body          | category id          |
//! |--------|---------|---------------|----------------------|
//! | Club   | `name`  | `description` | `category.id`        |
//! | Event  | `title` | `description` | `kind` (`"workshop"`)|
//! | Post   | `title` | `content`     | `post_type`          |

use crate::traits::Entity;
use catalog::{Club, Event, Post};

impl Entity for Club {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &str {
        &self.description
    }

    fn category_id(&self) -> Option<&str> {
        Some(&self.category.id)
    }
}

impl Entity for Event {
    fn name(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.description
    }

    fn category_id(&self) -> Option<&str> {
        self.kind.map(|kind| kind.as_str())
    }
}

impl Entity for Post {
    fn name(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn category_id(&self) -> Option<&str> {
        Some(self.post_type.as_str())
    }
}
