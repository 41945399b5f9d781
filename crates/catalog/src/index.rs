//! Catalog building, validation and feed views.
//!
//! Loading happens in three steps:
//! 1. Parse the fixture files in parallel
//! 2. Resolve club categories and insert records in file order
//! 3. Validate ids, slugs and club references

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load a catalog from a fixture directory.
    ///
    /// Expects `categories.json`, `clubs.json`, `events.json` and
    /// `posts.json`; `users.json` is optional.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {}", data_dir.display());

        let categories_path = data_dir.join("categories.json");
        let clubs_path = data_dir.join("clubs.json");
        let events_path = data_dir.join("events.json");
        let posts_path = data_dir.join("posts.json");
        let users_path = data_dir.join("users.json");

        // Nested joins give five-way parallel parsing
        let ((categories, clubs), ((events, posts), users)) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_categories(&categories_path),
                    || parser::parse_clubs(&clubs_path),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || parser::parse_events(&events_path),
                            || parser::parse_posts(&posts_path),
                        )
                    },
                    || parser::parse_users(&users_path),
                )
            },
        );

        let categories = categories?;
        let clubs = clubs?;
        let events = events?;
        let posts = posts?;
        let users = users?;

        debug!(
            "Parsed {} categories, {} clubs, {} events, {} posts, {} users",
            categories.len(),
            clubs.len(),
            events.len(),
            posts.len(),
            users.len()
        );

        let mut catalog = Catalog::new();

        for category in categories {
            let id = category.id.clone();
            if catalog.insert_category(category).is_some() {
                return Err(duplicate("category", "id", id));
            }
        }

        let by_id: HashMap<CategoryId, Category> = catalog
            .categories
            .iter()
            .map(|c| (c.id.clone(), c.clone()))
            .collect();

        for record in clubs {
            let club = record.resolve(&by_id, "clubs.json")?;
            let id = club.id.clone();
            if catalog.insert_club(club).is_some() {
                return Err(duplicate("club", "id", id));
            }
        }

        for event in events {
            let id = event.id.clone();
            if catalog.insert_event(event).is_some() {
                return Err(duplicate("event", "id", id));
            }
        }

        for post in posts {
            let id = post.id.clone();
            if catalog.insert_post(post).is_some() {
                return Err(duplicate("post", "id", id));
            }
        }

        for user in users {
            let id = user.id.clone();
            if catalog.insert_user(user).is_some() {
                return Err(duplicate("user", "id", id));
            }
        }

        catalog.validate()?;

        let counts = catalog.counts();
        info!(
            "Catalog loaded: {} clubs, {} events, {} posts",
            counts.clubs, counts.events, counts.posts
        );
        Ok(catalog)
    }

    /// Validate data integrity.
    ///
    /// Checks that:
    /// - slugs are unique per record kind
    /// - every club embeds a category known to the catalog
    /// - every event and post belongs to a known club
    /// - every club owner, when users are loaded, is a known user
    pub fn validate(&self) -> Result<()> {
        check_unique_slugs("club", self.clubs.iter().map(|c| c.slug.as_str()))?;
        check_unique_slugs("event", self.events.iter().map(|e| e.slug.as_str()))?;
        check_unique_slugs("post", self.posts.iter().map(|p| p.slug.as_str()))?;

        for club in &self.clubs {
            if self.get_category(&club.category.id).is_none() {
                return Err(CatalogError::MissingReference {
                    from: format!("club {}", club.id),
                    entity: "Category".to_string(),
                    id: club.category.id.clone(),
                });
            }
            if let Some(owner) = &club.owner_id {
                if !self.users.is_empty() && self.get_user(owner).is_none() {
                    return Err(CatalogError::MissingReference {
                        from: format!("club {}", club.id),
                        entity: "User".to_string(),
                        id: owner.clone(),
                    });
                }
            }
        }

        for event in &self.events {
            if self.get_club(&event.club_id).is_none() {
                return Err(CatalogError::MissingReference {
                    from: format!("event {}", event.id),
                    entity: "Club".to_string(),
                    id: event.club_id.clone(),
                });
            }
        }

        for post in &self.posts {
            if self.get_club(&post.club_id).is_none() {
                return Err(CatalogError::MissingReference {
                    from: format!("post {}", post.id),
                    entity: "Club".to_string(),
                    id: post.club_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Events still open on `today`, soonest first.
    ///
    /// An event is upcoming when its date is today or later and it is
    /// neither past nor cancelled.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| {
                e.date >= today
                    && !matches!(e.status, EventStatus::Past | EventStatus::Cancelled)
            })
            .collect();
        upcoming.sort_by_key(|e| e.date);
        upcoming
    }

    /// Events that are over on `today`, most recent first.
    ///
    /// Cancelled events that were never held in the past show up in
    /// neither view.
    pub fn past_events(&self, today: NaiveDate) -> Vec<&Event> {
        let mut past: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.date < today || e.status == EventStatus::Past)
            .collect();
        past.sort_by(|a, b| b.date.cmp(&a.date));
        past
    }

    /// Posts newest first
    pub fn news_feed(&self) -> Vec<&Post> {
        let mut feed: Vec<&Post> = self.posts.iter().collect();
        feed.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        feed
    }
}

fn duplicate(entity: &str, field: &str, value: String) -> CatalogError {
    CatalogError::Duplicate {
        entity: entity.to_string(),
        field: field.to_string(),
        value,
    }
}

fn check_unique_slugs<'a>(entity: &str, slugs: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(duplicate(entity, "slug", slug.to_string()));
        }
    }
    Ok(())
}
