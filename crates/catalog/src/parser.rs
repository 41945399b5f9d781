//! Parser for catalog fixture files.
//!
//! A catalog directory holds one JSON array per record kind:
//! - categories.json: `[{ "id", "name", "icon"? }]`
//! - clubs.json: clubs with a `category_id` instead of an embedded category
//! - events.json, posts.json: records shaped like [`Event`] and [`Post`]
//! - users.json: optional
//!
//! Clubs are stored on disk as [`ClubRecord`] and resolved against the
//! parsed categories, so a club can never embed a category the catalog
//! does not know about.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// On-disk shape of a club
#[derive(Debug, Clone, Deserialize)]
pub struct ClubRecord {
    pub id: ClubId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub logo_url: String,
    #[serde(default)]
    pub banner_image_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub meeting_schedule: Option<String>,
    pub member_count: u32,
    #[serde(default)]
    pub owner_id: Option<UserId>,
}

impl ClubRecord {
    /// Embed the referenced category, failing if it is unknown
    pub fn resolve(self, categories: &HashMap<CategoryId, Category>, file: &str) -> Result<Club> {
        let category = categories
            .get(&self.category_id)
            .cloned()
            .ok_or_else(|| CatalogError::MissingReference {
                from: file.to_string(),
                entity: "Category".to_string(),
                id: self.category_id.clone(),
            })?;

        Ok(Club {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            category,
            logo_url: self.logo_url,
            banner_image_url: self.banner_image_url,
            social_links: self.social_links,
            meeting_schedule: self.meeting_schedule,
            member_count: self.member_count,
            owner_id: self.owner_id,
        })
    }
}

/// Read a JSON array of records from a file
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_records(&content, &file_name(path))
}

/// Parse a JSON array of records, tagging errors with `file`
pub fn parse_records<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse categories.json
pub fn parse_categories(path: &Path) -> Result<Vec<Category>> {
    read_records(path)
}

/// Parse clubs.json into unresolved records
pub fn parse_clubs(path: &Path) -> Result<Vec<ClubRecord>> {
    read_records(path)
}

/// Parse events.json
pub fn parse_events(path: &Path) -> Result<Vec<Event>> {
    read_records(path)
}

/// Parse posts.json
pub fn parse_posts(path: &Path) -> Result<Vec<Post>> {
    read_records(path)
}

/// Parse users.json; a missing file means no users
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_records(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn technology() -> HashMap<CategoryId, Category> {
        let mut categories = HashMap::new();
        categories.insert(
            "5".to_string(),
            Category {
                id: "5".to_string(),
                name: "Technology".to_string(),
                icon: Some("Laptop".to_string()),
            },
        );
        categories
    }

    #[test]
    fn test_parse_club_record_and_resolve() {
        let json = r##"[{
            "id": "1",
            "slug": "coding-club",
            "name": "MSU Coding Club",
            "description": "A place for students passionate about coding.",
            "category_id": "5",
            "logo_url": "https://placehold.co/100x100.png",
            "social_links": { "website": "#" },
            "member_count": 120
        }]"##;

        let records: Vec<ClubRecord> = parse_records(json, "clubs.json").unwrap();
        assert_eq!(records.len(), 1);

        let club = records[0].clone().resolve(&technology(), "clubs.json").unwrap();
        assert_eq!(club.category.name, "Technology");
        assert_eq!(club.social_links.website.as_deref(), Some("#"));
        assert!(club.banner_image_url.is_none());
        assert!(club.owner_id.is_none());
    }

    #[test]
    fn test_resolve_unknown_category() {
        let json = r#"[{
            "id": "9", "slug": "ghost", "name": "Ghost Club", "description": "",
            "category_id": "99", "logo_url": "", "member_count": 0
        }]"#;
        let records: Vec<ClubRecord> = parse_records(json, "clubs.json").unwrap();

        let err = records[0].clone().resolve(&technology(), "clubs.json").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingReference { ref entity, ref id, .. } if entity == "Category" && id == "99"
        ));
    }

    #[test]
    fn test_parse_event_defaults() {
        let json = r#"[{
            "id": "evt3", "slug": "campus-cleanup-drive", "title": "Campus Clean-up Drive",
            "description": "Let's make our campus greener!", "date": "2024-09-28",
            "time": "9:00 AM", "location": "Meet at Central Quad",
            "club_name": "Eco Warriors Club", "club_id": "5"
        }]"#;
        let events: Vec<Event> = parse_records(json, "events.json").unwrap();

        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 9, 28).unwrap());
        assert_eq!(events[0].status, EventStatus::Upcoming);
        assert!(events[0].kind.is_none());
    }

    #[test]
    fn test_parse_post_type_field() {
        let json = r#"[{
            "id": "post2", "slug": "new-ai-workshop-series", "title": "New AI Workshop Series",
            "author": { "name": "Coding Club Admin" }, "club_name": "MSU Coding Club",
            "club_id": "1", "content": "Workshops on AI.", "publish_date": "2024-09-10",
            "likes": 88, "comments_count": 5, "type": "event_recap"
        }]"#;
        let posts: Vec<Post> = parse_records(json, "posts.json").unwrap();

        assert_eq!(posts[0].post_type, PostType::EventRecap);
        assert_eq!(posts[0].likes, 88);
    }

    #[test]
    fn test_malformed_json_reports_file() {
        let err = parse_records::<Category>("[{ \"id\": 1 ", "categories.json").unwrap_err();
        match err {
            CatalogError::ParseError { file, .. } => assert_eq!(file, "categories.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_users_file_is_empty() {
        let users = parse_users(Path::new("/definitely/not/here/users.json")).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_missing_required_file() {
        let err = parse_events(Path::new("/definitely/not/here/events.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
