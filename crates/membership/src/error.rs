//! Errors returned by membership operations.

use catalog::{ClubId, EventId, UserId};
use thiserror::Error;

/// Why a join, leave or RSVP request was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    #[error("Club not found: {0}")]
    UnknownClub(ClubId),

    #[error("Event not found: {0}")]
    UnknownEvent(EventId),

    #[error("User {user} is already a member of club {club}")]
    AlreadyMember { user: UserId, club: ClubId },

    #[error("User {user} is not a member of club {club}")]
    NotMember { user: UserId, club: ClubId },

    #[error("User {user} has already RSVP'd to event {event}")]
    AlreadyRsvpd { user: UserId, event: EventId },

    #[error("User {user} has no RSVP for event {event}")]
    NoRsvp { user: UserId, event: EventId },

    /// Past and cancelled events take no RSVPs
    #[error("RSVPs are closed for event {event} as it is {status}")]
    RsvpClosed { event: EventId, status: String },
}

pub type Result<T> = std::result::Result<T, MembershipError>;
