//! The membership/RSVP service interface.
//!
//! The directory treats membership as an external collaborator: pages
//! call these operations and render whatever comes back. How and where
//! memberships are stored is up to the implementation.

use crate::error::Result;
use crate::types::{MembershipChange, RsvpChange};
use async_trait::async_trait;
use catalog::ClubId;

/// Join/leave clubs and RSVP to events.
///
/// Every mutating call either succeeds with the new state or fails with a
/// [`MembershipError`](crate::MembershipError) saying why nothing changed.
#[async_trait]
pub trait MembershipService: Send + Sync {
    /// Add `user_id` to a club
    async fn join(&self, user_id: &str, club_id: &str) -> Result<MembershipChange>;

    /// Remove `user_id` from a club
    async fn leave(&self, user_id: &str, club_id: &str) -> Result<MembershipChange>;

    /// Register `user_id` for an event
    async fn rsvp(&self, user_id: &str, event_id: &str) -> Result<RsvpChange>;

    /// Withdraw a registration
    async fn cancel_rsvp(&self, user_id: &str, event_id: &str) -> Result<RsvpChange>;

    async fn is_member(&self, user_id: &str, club_id: &str) -> bool;

    async fn has_rsvp(&self, user_id: &str, event_id: &str) -> bool;

    /// Member count to display for a club
    async fn member_count(&self, club_id: &str) -> Result<u32>;

    /// Clubs `user_id` belongs to, in directory order
    async fn memberships(&self, user_id: &str) -> Vec<ClubId>;
}
