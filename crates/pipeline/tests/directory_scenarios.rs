//! Integration tests for the directory filter.
//!
//! These tests walk through the directory's search box and selector the
//! way a page would drive them.

use catalog::{Catalog, Club};
use pipeline::filters::{CategoryFilter, SearchTermFilter};
use pipeline::{filter, filter_owned, Entity, FilterCriteria, FilterPipeline};

#[derive(Debug, Clone, PartialEq)]
struct Listing {
    name: &'static str,
    description: &'static str,
    category: &'static str,
}

impl Entity for Listing {
    fn name(&self) -> &str {
        self.name
    }

    fn body(&self) -> &str {
        self.description
    }

    fn category_id(&self) -> Option<&str> {
        Some(self.category)
    }
}

fn three_clubs() -> Vec<Listing> {
    vec![
        Listing {
            name: "MSU Coding Club",
            description: "Workshops, hackathons and guest lectures.",
            category: "Technology",
        },
        Listing {
            name: "Debate Society",
            description: "Critical thinking and public speaking.",
            category: "Academic",
        },
        Listing {
            name: "Photography Club",
            description: "Photo walks and exhibitions.",
            category: "Arts",
        },
    ]
}

fn names<E: Entity>(entities: &[E]) -> Vec<&str> {
    entities.iter().map(|e| e.name()).collect()
}

#[test]
fn test_search_club_across_categories() {
    let clubs = three_clubs();
    let criteria = FilterCriteria::new().with_search("club").with_category("all");

    assert_eq!(
        names(&filter(&clubs, &criteria)),
        vec!["MSU Coding Club", "Photography Club"]
    );
}

#[test]
fn test_category_only() {
    let clubs = three_clubs();
    let criteria = FilterCriteria::new().with_search("").with_category("Technology");

    assert_eq!(names(&filter(&clubs, &criteria)), vec!["MSU Coding Club"]);
}

#[test]
fn test_no_match_is_empty() {
    let clubs = three_clubs();
    let criteria = FilterCriteria::new().with_search("zzz");

    assert!(filter(&clubs, &criteria).is_empty());
}

#[test]
fn test_unchanged_for_blank_criteria() {
    let clubs = three_clubs();
    let kept = filter_owned(clubs.clone(), &FilterCriteria::new());
    assert_eq!(kept, clubs);
}

#[test]
fn test_same_collection_many_criteria() {
    // One collection, queried repeatedly as the user types
    let catalog = Catalog::sample();
    let mut criteria = FilterCriteria::new();
    let mut seen = Vec::new();

    for typed in ["p", "ph", "pho", "phot", "photo"] {
        criteria = criteria.with_search(typed);
        seen.push(filter(catalog.clubs(), &criteria).len());
    }
    // Longer prefixes never widen the result
    assert!(seen.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(*seen.last().unwrap(), 1);

    criteria.clear();
    assert_eq!(filter(catalog.clubs(), &criteria).len(), catalog.clubs().len());
}

#[test]
fn test_nonexistent_category_is_not_an_error() {
    let catalog = Catalog::sample();
    let criteria = FilterCriteria::new().with_category("999");
    assert!(filter(catalog.clubs(), &criteria).is_empty());
}

#[test]
fn test_catalog_is_untouched() {
    let catalog = Catalog::sample();
    let before: Vec<Club> = catalog.clubs().to_vec();

    let _ = filter(
        catalog.clubs(),
        &FilterCriteria::new().with_search("club").with_category("3"),
    );

    assert_eq!(catalog.clubs(), before.as_slice());
}

#[test]
fn test_hand_built_pipeline_matches_criteria() {
    let catalog = Catalog::sample();
    let criteria = FilterCriteria::new().with_search("CLUB").with_category("2");

    let manual = FilterPipeline::new()
        .add_filter(SearchTermFilter::new("CLUB"))
        .add_filter(CategoryFilter::new("2"));

    let by_hand = manual.apply(catalog.clubs().iter().collect());
    let by_criteria = filter(catalog.clubs(), &criteria);

    assert_eq!(names(&by_hand), names(&by_criteria));
    assert_eq!(names(&by_criteria), vec!["Eco Warriors Club"]);
}

#[test]
fn test_concurrent_callers_share_collection() {
    let catalog = std::sync::Arc::new(Catalog::sample());
    let terms = ["club", "society", "hub", "soccer", "zzz"];

    let handles: Vec<_> = terms
        .iter()
        .map(|term| {
            let catalog = catalog.clone();
            let criteria = FilterCriteria::new().with_search(*term);
            std::thread::spawn(move || filter(catalog.clubs(), &criteria).len())
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![4, 1, 1, 1, 0]);
}
