//! Built-in sample catalog.
//!
//! The same six clubs, four events and three posts the directory ships
//! with, available without a data directory. Tests across the workspace
//! lean on this dataset.

use crate::types::*;
use chrono::NaiveDate;

const LOGO: &str = "https://placehold.co/100x100.png";
const BANNER: &str = "https://placehold.co/800x300.png";
const COVER: &str = "https://placehold.co/600x400.png";
const FEATURED: &str = "https://placehold.co/600x300.png";

fn category(id: &str, name: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: Some(icon.to_string()),
    }
}

fn links(facebook: bool, instagram: bool, twitter: bool, website: bool) -> SocialLinks {
    let link = |on: bool| on.then(|| "#".to_string());
    SocialLinks {
        facebook: link(facebook),
        instagram: link(instagram),
        twitter: link(twitter),
        website: link(website),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All sample dates are literal and valid
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn club(
    id: &str,
    slug: &str,
    name: &str,
    description: &str,
    category: &Category,
    banner: bool,
    social_links: SocialLinks,
    meeting_schedule: &str,
    member_count: u32,
    owner_id: &str,
) -> Club {
    Club {
        id: id.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.clone(),
        logo_url: LOGO.to_string(),
        banner_image_url: banner.then(|| BANNER.to_string()),
        social_links,
        meeting_schedule: Some(meeting_schedule.to_string()),
        member_count,
        owner_id: Some(owner_id.to_string()),
    }
}

impl Catalog {
    /// The directory's seed dataset
    pub fn sample() -> Self {
        let categories = vec![
            category("1", "Academic", "BookOpen"),
            category("2", "Service", "HeartHandshake"),
            category("3", "Arts & Culture", "Palette"),
            category("4", "Sports & Recreation", "Bike"),
            category("5", "Technology", "Laptop"),
            category("6", "Business & Entrepreneurship", "Briefcase"),
        ];

        let clubs = vec![
            club(
                "1",
                "coding-club",
                "MSU Coding Club",
                "A place for students passionate about coding. We host workshops, hackathons, and guest lectures from industry experts. Join us to learn, build, and network!",
                &categories[4],
                true,
                links(true, true, true, true),
                "Wednesdays, 6 PM - 8 PM, Tech Hub Room 101",
                120,
                "user123",
            ),
            club(
                "2",
                "debate-society",
                "Debate Society",
                "Sharpen your critical thinking and public speaking skills. We participate in inter-university competitions and host regular debates on current affairs.",
                &categories[0],
                true,
                links(true, false, false, true),
                "Mondays & Thursdays, 5 PM - 7 PM, Humanities Hall Room 203",
                75,
                "user456",
            ),
            club(
                "3",
                "photography-club",
                "Photography Club",
                "Capture moments and tell stories through your lens. We organize photo walks, workshops on various photography techniques, and exhibitions.",
                &categories[2],
                false,
                links(false, true, false, true),
                "Fridays, 4 PM - 6 PM, Arts Building Studio C",
                90,
                "user789",
            ),
            club(
                "4",
                "entrepreneurship-hub",
                "Entrepreneurship Hub",
                "Fostering innovation and startup culture on campus. Connect with mentors, attend pitching competitions, and learn how to turn ideas into businesses.",
                &categories[5],
                true,
                SocialLinks::default(),
                "Tuesdays, 6 PM, Business School Auditorium",
                150,
                "user101",
            ),
            club(
                "5",
                "eco-warriors-club",
                "Eco Warriors Club",
                "Dedicated to promoting environmental awareness and sustainability on campus. We organize clean-up drives, tree planting events, and workshops on green living.",
                &categories[1],
                true,
                links(true, true, false, true),
                "Saturdays, 10 AM - 12 PM, Community Garden",
                80,
                "user112",
            ),
            club(
                "6",
                "varsity-soccer-club",
                "Varsity Soccer Club",
                "Represent the university in soccer! Open to skilled players for competitive matches and training sessions with professional coaches.",
                &categories[3],
                false,
                SocialLinks::default(),
                "Mon, Wed, Fri 4 PM - 6 PM, University Sports Field",
                45,
                "user113",
            ),
        ];

        let events = vec![
            Event {
                id: "evt1".to_string(),
                slug: "annual-hackathon-2024".to_string(),
                title: "Annual Hackathon 2024".to_string(),
                description: "Join us for 24 hours of coding, innovation, and fun! Prizes for top projects. Food and drinks provided. All skill levels welcome.".to_string(),
                date: date(2024, 11, 15),
                time: "6:00 PM".to_string(),
                location: "Tech Hub Main Hall".to_string(),
                club_name: "MSU Coding Club".to_string(),
                club_id: "1".to_string(),
                cover_image_url: Some(COVER.to_string()),
                status: EventStatus::Upcoming,
                kind: Some(EventKind::Competition),
            },
            Event {
                id: "evt2".to_string(),
                slug: "photography-workshop-portraits".to_string(),
                title: "Photography Workshop: Mastering Portraits".to_string(),
                description: "Learn the art of portrait photography from a professional photographer. Hands-on session, bring your cameras!".to_string(),
                date: date(2024, 10, 20),
                time: "2:00 PM".to_string(),
                location: "Arts Building Studio C".to_string(),
                club_name: "Photography Club".to_string(),
                club_id: "3".to_string(),
                cover_image_url: Some(COVER.to_string()),
                status: EventStatus::Upcoming,
                kind: Some(EventKind::Workshop),
            },
            Event {
                id: "evt3".to_string(),
                slug: "campus-cleanup-drive".to_string(),
                title: "Campus Clean-up Drive".to_string(),
                description: "Let's make our campus greener! Join the Eco Warriors Club for a morning of cleaning and tree planting. Refreshments will be provided.".to_string(),
                date: date(2024, 9, 28),
                time: "9:00 AM".to_string(),
                location: "Meet at Central Quad".to_string(),
                club_name: "Eco Warriors Club".to_string(),
                club_id: "5".to_string(),
                cover_image_url: None,
                status: EventStatus::Past,
                kind: Some(EventKind::Social),
            },
            Event {
                id: "evt4".to_string(),
                slug: "startup-pitch-night".to_string(),
                title: "Startup Pitch Night".to_string(),
                description: "Witness innovative startup ideas from fellow students. Network with entrepreneurs and investors. An inspiring evening for aspiring business leaders.".to_string(),
                date: date(2024, 11, 5),
                time: "7:00 PM".to_string(),
                location: "Business School Auditorium".to_string(),
                club_name: "Entrepreneurship Hub".to_string(),
                club_id: "4".to_string(),
                cover_image_url: Some(COVER.to_string()),
                status: EventStatus::Upcoming,
                kind: Some(EventKind::Seminar),
            },
        ];

        let posts = vec![
            Post {
                id: "post1".to_string(),
                slug: "hackathon-winners-announced".to_string(),
                title: "Hackathon 2023 Winners Announced!".to_string(),
                author: Author {
                    name: "Jane Doe".to_string(),
                    avatar_url: Some("https://placehold.co/50x50.png".to_string()),
                },
                club_name: "MSU Coding Club".to_string(),
                club_id: "1".to_string(),
                content: "Congratulations to Team Innovate for winning this year's hackathon with their groundbreaking project on sustainable energy solutions. It was an amazing event with incredible participation...".to_string(),
                featured_image_url: Some(FEATURED.to_string()),
                publish_date: date(2023, 11, 20),
                likes: 152,
                comments_count: 12,
                post_type: PostType::EventRecap,
            },
            Post {
                id: "post2".to_string(),
                slug: "new-ai-workshop-series".to_string(),
                title: "New AI Workshop Series Starting Next Month".to_string(),
                author: Author {
                    name: "Coding Club Admin".to_string(),
                    avatar_url: None,
                },
                club_name: "MSU Coding Club".to_string(),
                club_id: "1".to_string(),
                content: "We are excited to announce a new series of workshops focused on Artificial Intelligence and Machine Learning. The first session will cover the basics of Python for AI. Sign up now!".to_string(),
                featured_image_url: None,
                publish_date: date(2024, 9, 10),
                likes: 88,
                comments_count: 5,
                post_type: PostType::Announcement,
            },
            Post {
                id: "post3".to_string(),
                slug: "debate-team-wins-nationals".to_string(),
                title: "Our Debate Team Wins National Championship!".to_string(),
                author: Author {
                    name: "Debate Society Lead".to_string(),
                    avatar_url: None,
                },
                club_name: "Debate Society".to_string(),
                club_id: "2".to_string(),
                content: "A huge round of applause for our incredible debate team who brought home the national championship trophy! Their hard work and dedication paid off. Read more about their journey...".to_string(),
                featured_image_url: Some(FEATURED.to_string()),
                publish_date: date(2024, 5, 15),
                likes: 210,
                comments_count: 25,
                post_type: PostType::Achievement,
            },
        ];

        let mut catalog = Catalog::new();
        for category in categories {
            catalog.insert_category(category);
        }
        for club in clubs {
            catalog.insert_club(club);
        }
        for event in events {
            catalog.insert_event(event);
        }
        for post in posts {
            catalog.insert_post(post);
        }
        catalog
    }
}
