//! Integration tests for loading a catalog from a fixture directory.

use catalog::{Catalog, CatalogError, EventKind, PostType};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn shipped_fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/campus")
}

/// Copy the shipped fixtures into a temp dir so tests can break them
fn fixture_copy() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["categories.json", "clubs.json", "events.json", "posts.json", "users.json"] {
        fs::copy(shipped_fixtures().join(name), dir.path().join(name)).unwrap();
    }
    dir
}

#[test]
fn test_shipped_fixtures_match_sample() {
    let loaded = Catalog::load_from_dir(&shipped_fixtures()).unwrap();
    let sample = Catalog::sample();

    assert_eq!(loaded.categories(), sample.categories());
    assert_eq!(loaded.clubs(), sample.clubs());
    assert_eq!(loaded.events(), sample.events());
    assert_eq!(loaded.posts(), sample.posts());
    assert_eq!(loaded.counts().users, 8);
}

#[test]
fn test_load_preserves_file_order() {
    let catalog = Catalog::load_from_dir(&shipped_fixtures()).unwrap();

    let names: Vec<&str> = catalog.clubs().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "MSU Coding Club",
            "Debate Society",
            "Photography Club",
            "Entrepreneurship Hub",
            "Eco Warriors Club",
            "Varsity Soccer Club",
        ]
    );
    assert_eq!(catalog.get_event("evt2").unwrap().kind, Some(EventKind::Workshop));
    assert_eq!(catalog.get_post("post1").unwrap().post_type, PostType::EventRecap);
}

#[test]
fn test_users_file_is_optional() {
    let dir = fixture_copy();
    fs::remove_file(dir.path().join("users.json")).unwrap();

    let catalog = Catalog::load_from_dir(dir.path()).unwrap();
    assert_eq!(catalog.counts().users, 0);
    assert_eq!(catalog.counts().clubs, 6);
}

#[test]
fn test_missing_clubs_file() {
    let dir = fixture_copy();
    fs::remove_file(dir.path().join("clubs.json")).unwrap();

    let err = Catalog::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::FileNotFound { ref path } if path.ends_with("clubs.json")));
}

#[test]
fn test_unknown_category_reference() {
    let dir = fixture_copy();
    let clubs = fs::read_to_string(dir.path().join("clubs.json")).unwrap();
    fs::write(
        dir.path().join("clubs.json"),
        clubs.replacen("\"category_id\": \"5\"", "\"category_id\": \"42\"", 1),
    )
    .unwrap();

    let err = Catalog::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MissingReference { ref entity, ref id, .. } if entity == "Category" && id == "42"
    ));
}

#[test]
fn test_post_for_unknown_club() {
    let dir = fixture_copy();
    let posts = fs::read_to_string(dir.path().join("posts.json")).unwrap();
    fs::write(
        dir.path().join("posts.json"),
        posts.replacen("\"club_id\": \"2\"", "\"club_id\": \"77\"", 1),
    )
    .unwrap();

    let err = Catalog::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MissingReference { ref entity, ref id, .. } if entity == "Club" && id == "77"
    ));
}

#[test]
fn test_duplicate_event_id() {
    let dir = fixture_copy();
    let events = fs::read_to_string(dir.path().join("events.json")).unwrap();
    fs::write(
        dir.path().join("events.json"),
        events.replace("\"id\": \"evt4\"", "\"id\": \"evt1\""),
    )
    .unwrap();

    let err = Catalog::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Duplicate { ref value, .. } if value == "evt1"));
}

#[test]
fn test_malformed_posts_file() {
    let dir = fixture_copy();
    fs::write(dir.path().join("posts.json"), "{ not json").unwrap();

    let err = Catalog::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::ParseError { ref file, .. } if file == "posts.json"));
}
