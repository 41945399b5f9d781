use anyhow::{Context, Result, anyhow};
use catalog::{Catalog, Club, Event, Post};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use membership::{InMemoryMembershipService, MembershipService};
use pipeline::{FilterCriteria, MATCH_ALL};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Events and posts shown on a club page before the "view all" hint
const CLUB_PREVIEW_LIMIT: usize = 2;

/// Club Hub - campus club directory
#[derive(Parser)]
#[command(name = "club-hub")]
#[command(about = "Browse and filter campus clubs, events and news", long_about = None)]
struct Cli {
    /// Directory with categories/clubs/events/posts JSON files.
    /// The built-in sample directory is used when omitted.
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List clubs
    Clubs {
        /// Case-insensitive text to look for in name or description
        #[arg(long, default_value = "")]
        search: String,

        /// Category id, or "all"
        #[arg(long, default_value = MATCH_ALL)]
        category: String,
    },

    /// List upcoming and past events
    Events {
        #[arg(long, default_value = "")]
        search: String,

        /// Event kind (workshop, seminar, social, competition), or "all"
        #[arg(long, default_value = MATCH_ALL)]
        kind: String,

        /// Date that splits upcoming from past (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show the news feed
    Posts {
        #[arg(long, default_value = "")]
        search: String,

        /// Post type (announcement, news, achievement, event_recap), or "all"
        #[arg(long = "type", default_value = MATCH_ALL)]
        post_type: String,
    },

    /// List categories with their club counts
    Categories,

    /// Show a club with its events and posts
    Club {
        /// Club slug, e.g. coding-club
        slug: String,
    },

    /// Show an event and whether it takes RSVPs
    Event {
        /// Event slug or id
        key: String,
    },

    /// Show a news post
    Post {
        /// Post slug
        slug: String,
    },

    /// List the clubs a user manages
    ManagedClubs {
        #[arg(long)]
        user: String,
    },

    /// Join a club
    Join {
        #[arg(long)]
        user: String,

        /// Club slug or id
        #[arg(long)]
        club: String,
    },

    /// Leave a club
    Leave {
        #[arg(long)]
        user: String,

        #[arg(long)]
        club: String,
    },

    /// RSVP to an event
    Rsvp {
        #[arg(long)]
        user: String,

        /// Event slug or id
        #[arg(long)]
        event: String,
    },

    /// Withdraw an RSVP
    CancelRsvp {
        #[arg(long)]
        user: String,

        #[arg(long)]
        event: String,
    },

    /// List the clubs a user belongs to
    Memberships {
        #[arg(long)]
        user: String,
    },

    /// Run the filter engine against random criteria
    Benchmark {
        /// Number of filter requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Arc::new(load_catalog(cli.data_dir.as_ref())?);
    let json = cli.json;

    match cli.command {
        Commands::Clubs { search, category } => handle_clubs(&catalog, search, category, json)?,
        Commands::Events { search, kind, today } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            handle_events(&catalog, search, kind, today, json)?
        }
        Commands::Posts { search, post_type } => handle_posts(&catalog, search, post_type, json)?,
        Commands::Categories => handle_categories(&catalog, json)?,
        Commands::Club { slug } => handle_club(&catalog, &slug, json)?,
        Commands::Event { key } => handle_event(&catalog, &key, json)?,
        Commands::Post { slug } => handle_post(&catalog, &slug, json)?,
        Commands::ManagedClubs { user } => handle_managed_clubs(&catalog, &user, json)?,
        Commands::Join { user, club } => {
            let service = InMemoryMembershipService::demo(catalog.clone());
            let club_id = resolve_club(&catalog, &club)?;
            let change = service.join(&user, &club_id).await?;
            print_membership_change(&change, json)?;
        }
        Commands::Leave { user, club } => {
            let service = InMemoryMembershipService::demo(catalog.clone());
            let club_id = resolve_club(&catalog, &club)?;
            let change = service.leave(&user, &club_id).await?;
            print_membership_change(&change, json)?;
        }
        Commands::Rsvp { user, event } => {
            let service = InMemoryMembershipService::demo(catalog.clone());
            let event_id = resolve_event(&catalog, &event)?;
            let change = service.rsvp(&user, &event_id).await?;
            print_rsvp_change(&change, json)?;
        }
        Commands::CancelRsvp { user, event } => {
            let service = InMemoryMembershipService::demo(catalog.clone());
            let event_id = resolve_event(&catalog, &event)?;
            let change = service.cancel_rsvp(&user, &event_id).await?;
            print_rsvp_change(&change, json)?;
        }
        Commands::Memberships { user } => handle_memberships(catalog, &user, json).await?,
        Commands::Benchmark { requests } => handle_benchmark(catalog, requests).await?,
    }

    Ok(())
}

fn load_catalog(data_dir: Option<&PathBuf>) -> Result<Catalog> {
    let Some(dir) = data_dir else {
        return Ok(Catalog::sample());
    };

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(dir)
        .with_context(|| format!("Failed to load directory data from {}", dir.display()))?;
    tracing::info!("Loaded {} in {:?}", dir.display(), start.elapsed());
    Ok(catalog)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Accept either a slug or an id
fn resolve_club(catalog: &Catalog, key: &str) -> Result<String> {
    catalog
        .get_club_by_slug(key)
        .or_else(|| catalog.get_club(key))
        .map(|club| club.id.clone())
        .ok_or_else(|| anyhow!("Club {} not found", key))
}

fn find_event<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a Event> {
    catalog
        .get_event_by_slug(key)
        .or_else(|| catalog.get_event(key))
        .ok_or_else(|| anyhow!("Event {} not found", key))
}

fn resolve_event(catalog: &Catalog, key: &str) -> Result<String> {
    find_event(catalog, key).map(|event| event.id.clone())
}

/// Split off the records a club page shows, returning how many are left out
fn preview<T>(items: &[T]) -> (&[T], usize) {
    let shown = items.len().min(CLUB_PREVIEW_LIMIT);
    (&items[..shown], items.len() - shown)
}

#[derive(Serialize)]
struct EventDetail<'a> {
    event: &'a Event,
    rsvp_open: bool,
}

impl<'a> EventDetail<'a> {
    fn new(event: &'a Event) -> Self {
        Self {
            event,
            rsvp_open: event.status.accepts_rsvp(),
        }
    }
}

fn mean_latency(timings: &[Duration]) -> Duration {
    if timings.is_empty() {
        return Duration::ZERO;
    }
    timings.iter().sum::<Duration>().div_f64(timings.len() as f64)
}

/// Handle the 'clubs' command
fn handle_clubs(catalog: &Catalog, search: String, category: String, json: bool) -> Result<()> {
    let criteria = FilterCriteria::new().with_search(search).with_category(category);
    let clubs = pipeline::filter(catalog.clubs(), &criteria);

    if json {
        return print_json(&clubs);
    }

    println!("{}", "Club Directory".bold().blue());
    if clubs.is_empty() {
        print_empty_state("No Clubs Found", "Try adjusting your search or filter criteria.");
        return Ok(());
    }
    for club in clubs {
        print_club_line(club);
    }
    Ok(())
}

/// Handle the 'events' command
fn handle_events(
    catalog: &Catalog,
    search: String,
    kind: String,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let criteria = FilterCriteria::new().with_search(search).with_category(kind);
    let upcoming = pipeline::filter_owned(catalog.upcoming_events(today), &criteria);
    let past = pipeline::filter_owned(catalog.past_events(today), &criteria);

    if json {
        return print_json(&serde_json::json!({ "upcoming": upcoming, "past": past }));
    }

    println!("{}", "Upcoming Events".bold().blue());
    if upcoming.is_empty() {
        print_empty_state("No Upcoming Events", "Check back soon for new events.");
    }
    for event in &upcoming {
        print_event_line(event);
    }

    println!();
    println!("{}", "Past Events".bold().blue());
    if past.is_empty() {
        print_empty_state("No Past Events", "Nothing matches your criteria.");
    }
    for event in &past {
        print_event_line(event);
    }
    Ok(())
}

/// Handle the 'posts' command
fn handle_posts(catalog: &Catalog, search: String, post_type: String, json: bool) -> Result<()> {
    let criteria = FilterCriteria::new().with_search(search).with_category(post_type);
    let posts = pipeline::filter_owned(catalog.news_feed(), &criteria);

    if json {
        return print_json(&posts);
    }

    println!("{}", "Club News & Updates".bold().blue());
    if posts.is_empty() {
        print_empty_state("No Posts Found", "Try adjusting your search or filter criteria.");
        return Ok(());
    }
    for post in posts {
        print_post_line(post);
    }
    Ok(())
}

#[derive(Serialize)]
struct CategorySummary<'a> {
    id: &'a str,
    name: &'a str,
    club_count: usize,
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog, json: bool) -> Result<()> {
    let summaries: Vec<CategorySummary> = catalog
        .categories()
        .iter()
        .map(|category| CategorySummary {
            id: &category.id,
            name: &category.name,
            club_count: catalog.club_count_in_category(&category.id),
        })
        .collect();

    if json {
        return print_json(&summaries);
    }

    println!("{}", "Categories".bold().blue());
    for summary in summaries {
        println!(
            "{} {} ({} clubs)",
            summary.id.green(),
            summary.name,
            summary.club_count
        );
    }
    Ok(())
}

/// Handle the 'club' command
fn handle_club(catalog: &Catalog, slug: &str, json: bool) -> Result<()> {
    let club = catalog
        .get_club_by_slug(slug)
        .ok_or_else(|| anyhow!("Club {} not found", slug))?;
    let events = catalog.events_for_club(&club.id);
    let posts = catalog.posts_for_club(&club.id);

    if json {
        return print_json(&serde_json::json!({
            "club": club,
            "events": events,
            "posts": posts,
        }));
    }

    println!("{}", club.name.bold().blue());
    println!("{}Category: {}", "• ".green(), club.category.name);
    println!("{}Members: {}", "• ".green(), club.member_count);
    if let Some(schedule) = &club.meeting_schedule {
        println!("{}Meets: {}", "• ".green(), schedule);
    }
    let links = &club.social_links;
    for (label, url) in [
        ("Facebook", &links.facebook),
        ("Instagram", &links.instagram),
        ("Twitter", &links.twitter),
        ("Website", &links.website),
    ] {
        if let Some(url) = url {
            println!("{}{}: {}", "• ".cyan(), label, url);
        }
    }
    println!();
    println!("{}", club.description);

    println!();
    println!("{}", "Events".bold());
    if events.is_empty() {
        println!("  {}", "No events yet".dimmed());
    }
    let (shown, hidden) = preview(&events);
    for event in shown {
        print_event_line(event);
    }
    if hidden > 0 {
        print_view_all(events.len(), "club-hub events --search", &club.name);
    }

    println!();
    println!("{}", "Posts".bold());
    if posts.is_empty() {
        println!("  {}", "No posts yet".dimmed());
    }
    let (shown, hidden) = preview(&posts);
    for post in shown {
        print_post_line(post);
    }
    if hidden > 0 {
        print_view_all(posts.len(), "club-hub posts --search", &club.name);
    }
    Ok(())
}

fn print_view_all(total: usize, command: &str, club_name: &str) {
    println!(
        "  {}",
        format!("{} total, view all with: {} \"{}\"", total, command, club_name).dimmed()
    );
}

/// Handle the 'event' command
fn handle_event(catalog: &Catalog, key: &str, json: bool) -> Result<()> {
    let detail = EventDetail::new(find_event(catalog, key)?);

    if json {
        return print_json(&detail);
    }

    let event = detail.event;
    println!("{}", event.title.bold().blue());
    println!("{}Hosted by: {}", "• ".green(), event.club_name);
    println!("{}When: {} at {}", "• ".green(), event.date, event.time);
    println!("{}Where: {}", "• ".green(), event.location);
    if let Some(kind) = event.kind {
        println!("{}Type: {}", "• ".green(), kind.label());
    }
    println!("{}Status: {}", "• ".green(), event.status.as_str());
    if detail.rsvp_open {
        println!("{}RSVP: {}", "• ".cyan(), "open".green());
    } else {
        println!("{}RSVP: {}", "• ".cyan(), "closed".red());
    }
    println!();
    println!("{}", event.description);
    Ok(())
}

/// Handle the 'post' command
fn handle_post(catalog: &Catalog, slug: &str, json: bool) -> Result<()> {
    let post = catalog
        .get_post_by_slug(slug)
        .ok_or_else(|| anyhow!("Post {} not found", slug))?;

    if json {
        return print_json(post);
    }

    println!("{}", post.title.bold().blue());
    println!(
        "{}{} for {} on {}",
        "• ".green(),
        post.author.name,
        post.club_name,
        post.publish_date
    );
    println!("{}Type: {}", "• ".green(), post.post_type.label());
    println!(
        "{}{} likes, {} comments",
        "• ".cyan(),
        post.likes,
        post.comments_count
    );
    println!();
    println!("{}", post.content);
    Ok(())
}

/// Handle the 'managed-clubs' command
fn handle_managed_clubs(catalog: &Catalog, user: &str, json: bool) -> Result<()> {
    let clubs = catalog.clubs_owned_by(user);

    if json {
        return print_json(&clubs);
    }

    println!("{}", format!("Clubs managed by {}", user).bold().blue());
    if clubs.is_empty() {
        print_empty_state("No Managed Clubs", "This user does not lead any club.");
        return Ok(());
    }
    for club in clubs {
        print_club_line(club);
    }
    Ok(())
}

/// Handle the 'memberships' command
async fn handle_memberships(catalog: Arc<Catalog>, user: &str, json: bool) -> Result<()> {
    let service = InMemoryMembershipService::demo(catalog.clone());
    let club_ids = service.memberships(user).await;
    let clubs: Vec<&Club> = club_ids
        .iter()
        .filter_map(|id| catalog.get_club(id))
        .collect();

    if json {
        return print_json(&clubs);
    }

    println!("{}", format!("Clubs joined by {}", user).bold().blue());
    if clubs.is_empty() {
        print_empty_state("No Memberships", "Join a club to see it here.");
        return Ok(());
    }
    for club in clubs {
        print_club_line(club);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    const TERMS: [&str; 8] = ["", "club", "coding", "workshop", "CAMPUS", "  photo ", "zzz", "a"];
    let category_ids: Vec<String> = catalog.categories().iter().map(|c| c.id.clone()).collect();

    // Random criteria, drawn up front so they stay out of the timings
    let criteria: Vec<FilterCriteria> = (0..requests)
        .map(|_| {
            let term = TERMS[rand::random::<u32>() as usize % TERMS.len()];
            // One slot past the end stands for "all"
            let pick = rand::random::<u32>() as usize % (category_ids.len() + 1);
            let category = category_ids
                .get(pick)
                .map(String::as_str)
                .unwrap_or(MATCH_ALL);
            FilterCriteria::new().with_search(term).with_category(category)
        })
        .collect();

    let start = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for criteria in criteria {
        let catalog = catalog.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let matches = pipeline::filter(catalog.clubs(), &criteria).len()
                + pipeline::filter(catalog.events(), &criteria).len()
                + pipeline::filter(catalog.posts(), &criteria).len();
            (started.elapsed(), matches)
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut total_matches = 0;
    for handle in handles {
        let (elapsed, matches) = handle.await?;
        timings.push(elapsed);
        total_matches += matches;
    }
    let wall_time = start.elapsed();

    timings.sort();
    let avg_latency = mean_latency(&timings);
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p) as usize];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Total matches: {}", total_matches);
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_membership_change(change: &membership::MembershipChange, json: bool) -> Result<()> {
    if json {
        return print_json(change);
    }
    let verb = if change.is_member { "joined" } else { "left" };
    println!(
        "{} {} {} {} ({} members)",
        "✓".green(),
        change.user_id,
        verb,
        change.club_name.bold(),
        change.member_count
    );
    Ok(())
}

fn print_rsvp_change(change: &membership::RsvpChange, json: bool) -> Result<()> {
    if json {
        return print_json(change);
    }
    let verb = if change.has_rsvp { "is going to" } else { "is no longer going to" };
    println!(
        "{} {} {} {} ({} attending)",
        "✓".green(),
        change.user_id,
        verb,
        change.event_title.bold(),
        change.attendee_count
    );
    Ok(())
}

fn print_empty_state(title: &str, hint: &str) {
    println!("  {}", title.yellow());
    println!("  {}", hint.dimmed());
}

fn print_club_line(club: &Club) {
    println!(
        "{} {} [{}] - {} members",
        club.slug.green(),
        club.name.bold(),
        club.category.name,
        club.member_count
    );
}

fn print_event_line(event: &Event) {
    let kind = event.kind.map(|k| k.label()).unwrap_or("Event");
    println!(
        "{} {} {} [{}] - {} at {}, {}",
        event.date.to_string().green(),
        event.title.bold(),
        format!("({})", event.club_name).dimmed(),
        kind,
        event.time,
        event.location,
        event.status.as_str()
    );
}

fn print_post_line(post: &Post) {
    println!(
        "{} {} [{}] by {} - {} likes, {} comments",
        post.publish_date.to_string().green(),
        post.title.bold(),
        post.post_type.label(),
        post.author.name,
        post.likes,
        post.comments_count
    );
}
