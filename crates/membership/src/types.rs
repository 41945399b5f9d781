//! Outcomes of membership operations.

use catalog::{ClubId, EventId, UserId};
use serde::Serialize;

/// Result of a successful join or leave
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipChange {
    pub user_id: UserId,
    pub club_id: ClubId,
    pub club_name: String,
    /// Membership after the operation
    pub is_member: bool,
    /// Displayed member count after the operation
    pub member_count: u32,
}

/// Result of a successful RSVP or cancellation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpChange {
    pub user_id: UserId,
    pub event_id: EventId,
    pub event_title: String,
    /// RSVP state after the operation
    pub has_rsvp: bool,
    /// Number of RSVPs recorded for the event after the operation
    pub attendee_count: usize,
}
