//! Core domain types for the campus club directory.
//!
//! Everything the directory shows is one of four record kinds:
//! categories, clubs, events and posts. Users only appear as club owners
//! and as the subject of membership operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a club category ("1".."6" in the seed data)
pub type CategoryId = String;

/// Identifier of a club
pub type ClubId = String;

/// Identifier of an event ("evt1", ...)
pub type EventId = String;

/// Identifier of a news post ("post1", ...)
pub type PostId = String;

/// Identifier of a user ("user123", ...)
pub type UserId = String;

// =============================================================================
// Clubs
// =============================================================================

/// A club category such as "Technology" or "Arts & Culture"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon name used by the front end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Social media links of a club; every link is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// True when no link is set
    pub fn is_empty(&self) -> bool {
        self.facebook.is_none()
            && self.instagram.is_none()
            && self.twitter.is_none()
            && self.website.is_none()
    }
}

/// A student club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// The category is resolved and embedded when the catalog is loaded
    pub category: Category,
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "SocialLinks::is_empty")]
    pub social_links: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_schedule: Option<String>,
    /// Baseline member count as published by the club
    pub member_count: u32,
    /// User who created or manages the club
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
}

// =============================================================================
// Events
// =============================================================================

/// Lifecycle state of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Past,
    Cancelled,
}

impl EventStatus {
    /// RSVPs are only accepted while an event has not ended or been called off
    pub fn accepts_rsvp(self) -> bool {
        matches!(self, EventStatus::Upcoming | EventStatus::Ongoing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Past => "past",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

/// Kind of event, used by the event calendar's type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Workshop,
    Seminar,
    Social,
    Competition,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Workshop,
        EventKind::Seminar,
        EventKind::Social,
        EventKind::Competition,
    ];

    /// Identifier matched by the type selector
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Workshop => "workshop",
            EventKind::Seminar => "seminar",
            EventKind::Social => "social",
            EventKind::Competition => "competition",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Workshop => "Workshop",
            EventKind::Seminar => "Seminar",
            EventKind::Social => "Social",
            EventKind::Competition => "Competition",
        }
    }
}

/// An event hosted by a club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free-form display time, e.g. "6:00 PM"
    pub time: String,
    pub location: String,
    pub club_name: String,
    pub club_id: ClubId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
}

// =============================================================================
// Posts
// =============================================================================

/// Kind of news post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Announcement,
    News,
    Achievement,
    EventRecap,
}

impl PostType {
    pub const ALL: [PostType; 4] = [
        PostType::Announcement,
        PostType::News,
        PostType::Achievement,
        PostType::EventRecap,
    ];

    /// Identifier matched by the type selector
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Announcement => "announcement",
            PostType::News => "news",
            PostType::Achievement => "achievement",
            PostType::EventRecap => "event_recap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostType::Announcement => "Announcement",
            PostType::News => "News",
            PostType::Achievement => "Achievement",
            PostType::EventRecap => "Event Recap",
        }
    }
}

/// Author byline of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A news post published by a club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub author: Author,
    pub club_name: String,
    pub club_id: ClubId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<String>,
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(rename = "type")]
    pub post_type: PostType,
}

// =============================================================================
// Users
// =============================================================================

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    SdoAdmin,
    ClubLead,
    Student,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Catalog - the in-memory directory
// =============================================================================

/// Record counts, mostly for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub categories: usize,
    pub clubs: usize,
    pub events: usize,
    pub posts: usize,
    pub users: usize,
}

/// Holds every record of the directory.
///
/// Records are kept in insertion order, which is the order the directory
/// lists them in. Id and slug lookups go through index maps into those
/// vectors.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) categories: Vec<Category>,
    pub(crate) clubs: Vec<Club>,
    pub(crate) events: Vec<Event>,
    pub(crate) posts: Vec<Post>,
    pub(crate) users: Vec<User>,

    pub(crate) category_index: HashMap<CategoryId, usize>,
    pub(crate) club_index: HashMap<ClubId, usize>,
    pub(crate) club_slugs: HashMap<String, usize>,
    pub(crate) event_index: HashMap<EventId, usize>,
    pub(crate) event_slugs: HashMap<String, usize>,
    pub(crate) post_index: HashMap<PostId, usize>,
    pub(crate) post_slugs: HashMap<String, usize>,
    pub(crate) user_index: HashMap<UserId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    // Ordered views

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    // Lookups

    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    pub fn get_club(&self, id: &str) -> Option<&Club> {
        self.club_index.get(id).map(|&i| &self.clubs[i])
    }

    pub fn get_club_by_slug(&self, slug: &str) -> Option<&Club> {
        self.club_slugs.get(slug).map(|&i| &self.clubs[i])
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.event_index.get(id).map(|&i| &self.events[i])
    }

    pub fn get_event_by_slug(&self, slug: &str) -> Option<&Event> {
        self.event_slugs.get(slug).map(|&i| &self.events[i])
    }

    pub fn get_post(&self, id: &str) -> Option<&Post> {
        self.post_index.get(id).map(|&i| &self.posts[i])
    }

    pub fn get_post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.post_slugs.get(slug).map(|&i| &self.posts[i])
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.user_index.get(id).map(|&i| &self.users[i])
    }

    /// Events hosted by a club, in catalog order
    pub fn events_for_club(&self, club_id: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.club_id == club_id).collect()
    }

    /// Posts published by a club, in catalog order
    pub fn posts_for_club(&self, club_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.club_id == club_id).collect()
    }

    /// Clubs a user created or manages
    pub fn clubs_owned_by(&self, user_id: &str) -> Vec<&Club> {
        self.clubs
            .iter()
            .filter(|c| c.owner_id.as_deref() == Some(user_id))
            .collect()
    }

    /// Number of clubs in a category
    pub fn club_count_in_category(&self, category_id: &str) -> usize {
        self.clubs
            .iter()
            .filter(|c| c.category.id == category_id)
            .count()
    }

    // Mutators
    //
    // Each insert keeps the record's position when the id is already
    // present and returns the record it replaced.

    pub fn insert_category(&mut self, category: Category) -> Option<Category> {
        upsert(&mut self.categories, &mut self.category_index, category.id.clone(), category)
    }

    pub fn insert_club(&mut self, club: Club) -> Option<Club> {
        let slug = club.slug.clone();
        let id = club.id.clone();
        let replaced = upsert(&mut self.clubs, &mut self.club_index, id.clone(), club);
        if let Some(old) = &replaced {
            if old.slug != slug {
                self.club_slugs.remove(&old.slug);
            }
        }
        let position = self.club_index[&id];
        self.club_slugs.entry(slug).or_insert(position);
        replaced
    }

    pub fn insert_event(&mut self, event: Event) -> Option<Event> {
        let slug = event.slug.clone();
        let id = event.id.clone();
        let replaced = upsert(&mut self.events, &mut self.event_index, id.clone(), event);
        if let Some(old) = &replaced {
            if old.slug != slug {
                self.event_slugs.remove(&old.slug);
            }
        }
        let position = self.event_index[&id];
        self.event_slugs.entry(slug).or_insert(position);
        replaced
    }

    pub fn insert_post(&mut self, post: Post) -> Option<Post> {
        let slug = post.slug.clone();
        let id = post.id.clone();
        let replaced = upsert(&mut self.posts, &mut self.post_index, id.clone(), post);
        if let Some(old) = &replaced {
            if old.slug != slug {
                self.post_slugs.remove(&old.slug);
            }
        }
        let position = self.post_index[&id];
        self.post_slugs.entry(slug).or_insert(position);
        replaced
    }

    pub fn insert_user(&mut self, user: User) -> Option<User> {
        upsert(&mut self.users, &mut self.user_index, user.id.clone(), user)
    }

    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            categories: self.categories.len(),
            clubs: self.clubs.len(),
            events: self.events.len(),
            posts: self.posts.len(),
            users: self.users.len(),
        }
    }
}

/// Insert into an ordered vector with an id index, replacing in place
fn upsert<T>(items: &mut Vec<T>, index: &mut HashMap<String, usize>, id: String, item: T) -> Option<T> {
    match index.get(&id) {
        Some(&position) => Some(std::mem::replace(&mut items[position], item)),
        None => {
            index.insert(id, items.len());
            items.push(item);
            None
        }
    }
}
