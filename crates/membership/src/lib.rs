//! # Membership Crate
//!
//! Club membership and event RSVPs for the campus directory.
//!
//! ## Components
//!
//! ### MembershipService
//! The interface pages talk to: `join`, `leave`, `rsvp`, `cancel_rsvp`,
//! plus read-side queries. Each mutating call returns the new state or a
//! [`MembershipError`] explaining the refusal.
//!
//! ### InMemoryMembershipService
//! A process-local implementation for demos and tests:
//! - Joining bumps the club's displayed member count, leaving lowers it
//! - Past and cancelled events refuse RSVPs
//! - State is shared safely across tasks behind a tokio `RwLock`
//!
//! ## Example Usage
//!
//! ```ignore
//! use membership::{InMemoryMembershipService, MembershipService};
//! use std::sync::Arc;
//!
//! let service = InMemoryMembershipService::new(Arc::new(catalog));
//! let change = service.join("user001", "3").await?;
//! println!("{} now has {} members", change.club_name, change.member_count);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod service;
pub mod in_memory;

// Re-export commonly used types
pub use error::{MembershipError, Result};
pub use in_memory::{InMemoryMembershipService, DEMO_USER};
pub use service::MembershipService;
pub use types::{MembershipChange, RsvpChange};
