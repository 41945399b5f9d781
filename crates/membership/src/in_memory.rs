//! In-memory membership service.
//!
//! Stands in for a real backend: state lives in a few hash maps behind a
//! `tokio::sync::RwLock` and is gone when the service is dropped.

use crate::error::{MembershipError, Result};
use crate::service::MembershipService;
use crate::types::{MembershipChange, RsvpChange};
use async_trait::async_trait;
use catalog::{Catalog, Club, ClubId, Event, EventId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// User the demo memberships are seeded for
pub const DEMO_USER: &str = "user001";

#[derive(Debug, Default)]
struct MembershipState {
    members: HashMap<ClubId, HashSet<UserId>>,
    rsvps: HashMap<EventId, HashSet<UserId>>,
    /// Displayed member count per club, once it has changed
    counts: HashMap<ClubId, u32>,
}

impl MembershipState {
    fn displayed_count(&self, club: &Club) -> u32 {
        self.counts.get(&club.id).copied().unwrap_or(club.member_count)
    }

    fn count_mut(&mut self, club: &Club) -> &mut u32 {
        self.counts.entry(club.id.clone()).or_insert(club.member_count)
    }

    fn is_member(&self, user_id: &str, club_id: &str) -> bool {
        self.members
            .get(club_id)
            .is_some_and(|users| users.contains(user_id))
    }

    fn has_rsvp(&self, user_id: &str, event_id: &str) -> bool {
        self.rsvps
            .get(event_id)
            .is_some_and(|users| users.contains(user_id))
    }

    fn attendee_count(&self, event_id: &str) -> usize {
        self.rsvps.get(event_id).map_or(0, HashSet::len)
    }
}

/// Membership service backed by process memory.
///
/// ## Member counts
/// A club's displayed count starts at its published `member_count`. Each
/// successful join adds one and each successful leave removes one, never
/// going below zero. Seeded memberships are assumed to be part of the
/// published count already and do not change it.
pub struct InMemoryMembershipService {
    catalog: Arc<Catalog>,
    state: RwLock<MembershipState>,
}

impl InMemoryMembershipService {
    /// Create a service with no memberships or RSVPs.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: RwLock::new(MembershipState::default()),
        }
    }

    /// Seed existing memberships (builder pattern).
    ///
    /// Unknown club ids are skipped.
    pub fn with_memberships<I, S>(mut self, user_id: &str, club_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let state = self.state.get_mut();
        for club_id in club_ids {
            let club_id = club_id.as_ref();
            if self.catalog.get_club(club_id).is_some() {
                state
                    .members
                    .entry(club_id.to_string())
                    .or_default()
                    .insert(user_id.to_string());
            }
        }
        self
    }

    /// Service seeded like the directory demo: [`DEMO_USER`] belongs to
    /// the first two clubs of the catalog.
    pub fn demo(catalog: Arc<Catalog>) -> Self {
        let first_two: Vec<ClubId> = catalog.clubs().iter().take(2).map(|c| c.id.clone()).collect();
        Self::new(catalog).with_memberships(DEMO_USER, first_two)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn club(&self, club_id: &str) -> Result<&Club> {
        self.catalog
            .get_club(club_id)
            .ok_or_else(|| MembershipError::UnknownClub(club_id.to_string()))
    }

    fn event(&self, event_id: &str) -> Result<&Event> {
        self.catalog
            .get_event(event_id)
            .ok_or_else(|| MembershipError::UnknownEvent(event_id.to_string()))
    }
}

#[async_trait]
impl MembershipService for InMemoryMembershipService {
    async fn join(&self, user_id: &str, club_id: &str) -> Result<MembershipChange> {
        let club = self.club(club_id)?;
        let mut state = self.state.write().await;

        let inserted = state
            .members
            .entry(club.id.clone())
            .or_default()
            .insert(user_id.to_string());
        if !inserted {
            return Err(MembershipError::AlreadyMember {
                user: user_id.to_string(),
                club: club.id.clone(),
            });
        }
        let count = state.count_mut(club);
        *count = count.saturating_add(1);

        let member_count = state.displayed_count(club);
        info!("User {} joined {} ({} members)", user_id, club.name, member_count);

        Ok(MembershipChange {
            user_id: user_id.to_string(),
            club_id: club.id.clone(),
            club_name: club.name.clone(),
            is_member: true,
            member_count,
        })
    }

    async fn leave(&self, user_id: &str, club_id: &str) -> Result<MembershipChange> {
        let club = self.club(club_id)?;
        let mut state = self.state.write().await;

        let removed = state
            .members
            .get_mut(&club.id)
            .is_some_and(|users| users.remove(user_id));
        if !removed {
            return Err(MembershipError::NotMember {
                user: user_id.to_string(),
                club: club.id.clone(),
            });
        }
        let count = state.count_mut(club);
        *count = count.saturating_sub(1);

        let member_count = state.displayed_count(club);
        info!("User {} left {} ({} members)", user_id, club.name, member_count);

        Ok(MembershipChange {
            user_id: user_id.to_string(),
            club_id: club.id.clone(),
            club_name: club.name.clone(),
            is_member: false,
            member_count,
        })
    }

    async fn rsvp(&self, user_id: &str, event_id: &str) -> Result<RsvpChange> {
        let event = self.event(event_id)?;
        if !event.status.accepts_rsvp() {
            return Err(MembershipError::RsvpClosed {
                event: event.id.clone(),
                status: event.status.as_str().to_string(),
            });
        }

        let mut state = self.state.write().await;
        let inserted = state
            .rsvps
            .entry(event.id.clone())
            .or_default()
            .insert(user_id.to_string());
        if !inserted {
            return Err(MembershipError::AlreadyRsvpd {
                user: user_id.to_string(),
                event: event.id.clone(),
            });
        }

        info!("User {} RSVP'd to {}", user_id, event.title);
        Ok(RsvpChange {
            user_id: user_id.to_string(),
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            has_rsvp: true,
            attendee_count: state.attendee_count(&event.id),
        })
    }

    async fn cancel_rsvp(&self, user_id: &str, event_id: &str) -> Result<RsvpChange> {
        let event = self.event(event_id)?;
        let mut state = self.state.write().await;

        let removed = state
            .rsvps
            .get_mut(&event.id)
            .is_some_and(|users| users.remove(user_id));
        if !removed {
            return Err(MembershipError::NoRsvp {
                user: user_id.to_string(),
                event: event.id.clone(),
            });
        }

        info!("User {} cancelled RSVP for {}", user_id, event.title);
        Ok(RsvpChange {
            user_id: user_id.to_string(),
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            has_rsvp: false,
            attendee_count: state.attendee_count(&event.id),
        })
    }

    async fn is_member(&self, user_id: &str, club_id: &str) -> bool {
        self.state.read().await.is_member(user_id, club_id)
    }

    async fn has_rsvp(&self, user_id: &str, event_id: &str) -> bool {
        self.state.read().await.has_rsvp(user_id, event_id)
    }

    async fn member_count(&self, club_id: &str) -> Result<u32> {
        let club = self.club(club_id)?;
        Ok(self.state.read().await.displayed_count(club))
    }

    async fn memberships(&self, user_id: &str) -> Vec<ClubId> {
        let state = self.state.read().await;
        self.catalog
            .clubs()
            .iter()
            .filter(|club| state.is_member(user_id, &club.id))
            .map(|club| club.id.clone())
            .collect()
    }
}
