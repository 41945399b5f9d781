use catalog::Catalog;
use membership::{InMemoryMembershipService, MembershipError, MembershipService, DEMO_USER};
use std::sync::Arc;

fn demo_service() -> Arc<InMemoryMembershipService> {
    Arc::new(InMemoryMembershipService::demo(Arc::new(Catalog::sample())))
}

#[tokio::test]
async fn demo_user_starts_in_first_two_clubs() {
    let service = demo_service();

    assert!(service.is_member(DEMO_USER, "1").await);
    assert!(service.is_member(DEMO_USER, "2").await);
    assert!(!service.is_member(DEMO_USER, "3").await);
    // Seeding leaves the published counts alone
    assert_eq!(service.member_count("1").await.unwrap(), 120);
    assert_eq!(service.member_count("2").await.unwrap(), 75);
}

#[tokio::test]
async fn join_then_leave_restores_count() {
    let service = demo_service();

    let joined = service.join("student42", "6").await.unwrap();
    assert_eq!(joined.member_count, 46);
    let left = service.leave("student42", "6").await.unwrap();
    assert_eq!(left.member_count, 45);
    assert!(!left.is_member);
}

#[tokio::test]
async fn concurrent_joins_are_all_counted() {
    let service = demo_service();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.join(&format!("student{i}"), "3").await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.member_count("3").await.unwrap(), 110);
}

#[tokio::test]
async fn concurrent_duplicate_join_succeeds_once() {
    let service = demo_service();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.join("student7", "4").await })
        })
        .collect();

    let mut successes = 0;
    let mut rejections = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(MembershipError::AlreadyMember { .. }) => rejections += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(rejections, 7);
    assert_eq!(service.member_count("4").await.unwrap(), 151);
}

#[tokio::test]
async fn rsvp_depends_on_event_status() {
    let service = demo_service();

    // Upcoming events accept RSVPs
    for event_id in ["evt1", "evt2", "evt4"] {
        let change = service.rsvp(DEMO_USER, event_id).await.unwrap();
        assert!(change.has_rsvp, "{event_id}");
    }

    // The clean-up drive already happened
    assert!(matches!(
        service.rsvp(DEMO_USER, "evt3").await,
        Err(MembershipError::RsvpClosed { .. })
    ));
    assert!(!service.has_rsvp(DEMO_USER, "evt3").await);
}

#[tokio::test]
async fn rsvps_are_tracked_per_user() {
    let service = demo_service();

    service.rsvp("alice", "evt2").await.unwrap();
    let change = service.rsvp("bob", "evt2").await.unwrap();
    assert_eq!(change.attendee_count, 2);

    let change = service.cancel_rsvp("alice", "evt2").await.unwrap();
    assert_eq!(change.attendee_count, 1);
    assert!(!service.has_rsvp("alice", "evt2").await);
    assert!(service.has_rsvp("bob", "evt2").await);
}

#[tokio::test]
async fn leaving_never_drops_below_zero() {
    let mut catalog = Catalog::sample();
    let mut club = catalog.get_club("6").unwrap().clone();
    club.member_count = 0;
    catalog.insert_club(club);

    let service = InMemoryMembershipService::new(Arc::new(catalog))
        .with_memberships("alice", ["6"])
        .with_memberships("bob", ["6"]);

    assert_eq!(service.leave("alice", "6").await.unwrap().member_count, 0);
    assert_eq!(service.leave("bob", "6").await.unwrap().member_count, 0);
}

#[tokio::test]
async fn join_after_floor_counts_from_zero() {
    let mut catalog = Catalog::sample();
    let mut club = catalog.get_club("6").unwrap().clone();
    club.member_count = 0;
    catalog.insert_club(club);

    let service = InMemoryMembershipService::new(Arc::new(catalog))
        .with_memberships("alice", ["6"])
        .with_memberships("bob", ["6"]);

    service.leave("alice", "6").await.unwrap();
    service.leave("bob", "6").await.unwrap();

    let joined = service.join("carol", "6").await.unwrap();
    assert_eq!(joined.member_count, 1);
    assert_eq!(service.member_count("6").await.unwrap(), 1);
}
