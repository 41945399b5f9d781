//! # Catalog Crate
//!
//! This crate loads and indexes the campus club directory: categories,
//! clubs, events and news posts.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Category, Club, Event, Post, User, Catalog)
//! - **parser**: Parse JSON fixture files into Rust structs
//! - **index**: Load a fixture directory, validate it, build feed views
//! - **sample**: The built-in seed dataset
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data/campus"))?;
//!
//! let club = catalog.get_club_by_slug("coding-club").unwrap();
//! let events = catalog.events_for_club(&club.id);
//!
//! println!("{} hosts {} events", club.name, events.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Identifiers
    CategoryId,
    ClubId,
    EventId,
    PostId,
    UserId,
    // Records
    Author,
    Catalog,
    CatalogCounts,
    Category,
    Club,
    Event,
    Post,
    SocialLinks,
    User,
    // Enums
    EventKind,
    EventStatus,
    PostType,
    Role,
};
