use std::path::PathBuf;

use clap::Parser;
use escapegen::{Planner, TripRecord, TripStatus, domain::trip::Tag};
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `escape show`.
#[derive(Debug, Parser)]
#[command(about = "Show the full card for one trip")]
pub struct Show {
    /// The id of the trip, from the results or the board.
    id: String,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let planner = Planner::open(&root);
        let Some(trip) = planner.find_trip(&self.id) else {
            anyhow::bail!(
                "no trip with id '{}' in the current results or on the board",
                self.id
            );
        };

        print_card(trip, planner.board().get(&self.id));
        Ok(())
    }
}

fn print_card(trip: &TripRecord, board_copy: Option<&TripRecord>) {
    let payload = &trip.payload;

    let tag = match payload.tag {
        Some(Tag::Overrated) => format!("  [{}]", "Overrated".warning()),
        Some(Tag::Underrated) => format!("  [{}]", "Underrated".success()),
        None => String::new(),
    };
    println!("{}{tag}", payload.destination.to_uppercase());
    println!("{}", "────────────────────────────".dim());
    println!("{}", payload.why_fits);
    println!();
    println!(
        "Reality score: {}/10 · {} km · {} · crowds: {:?} · {:?}",
        payload.reality_score,
        payload.distance,
        payload.travel_time,
        payload.crowd_level,
        payload.weather,
    );
    println!("Best time: {}", payload.best_time);
    println!();

    println!("Budget: {} {}", payload.budget_range, payload.cost_stats.dim());
    println!("  Stay   {}", payload.cost_breakdown.stay);
    println!("  Travel {}", payload.cost_breakdown.travel);
    println!("  Food   {}", payload.cost_breakdown.food);
    println!("  Misc   {}", payload.cost_breakdown.misc);
    println!();

    if !payload.itinerary.is_empty() {
        println!("Itinerary");
        for day in &payload.itinerary {
            println!("  Day {}: {}", day.day, day.title);
            for item in &day.items {
                let note = item
                    .note
                    .as_ref()
                    .map_or_else(String::new, |n| format!(" ({n})").dim());
                println!("    {:<10} {}{note}", format!("{:?}", item.time), item.activity);
            }
        }
        println!();
    }

    println!("Stay: {}", payload.stay_suggestion);
    for hotel in &payload.hotels {
        println!(
            "  {} · {} · {}  {}",
            hotel.name,
            hotel.kind,
            hotel.approx_price,
            hotel.maps_url.dim()
        );
    }
    println!();

    if !payload.experiences.is_empty() {
        println!("Don't miss: {}", payload.experiences.join(", "));
    }
    println!("Eat: {}", payload.food_highlight);
    println!("Weather watch: {}", payload.weather_sensitivity);
    println!();

    println!("{} {}", "Not for everyone:".warning(), payload.not_for_everyone);
    println!();

    for story in &payload.user_stories {
        println!("  \"{}\"", story.text);
        println!("    {}", format!("{}, {}", story.username, story.date).dim());
    }
    if !payload.user_stories.is_empty() {
        println!();
    }

    for image in &payload.images {
        println!("  📷 {}  {}", image.url, format!("via {}", image.source_url).dim());
    }
    if !payload.images.is_empty() {
        println!();
    }

    println!("Maps: {}", payload.destination_maps_url);
    println!("Why this weekend: {}", format!("\"{}\"", payload.nudge_reason).info());

    if let Some(copy) = board_copy {
        let status = match copy.status {
            TripStatus::Completed => "completed".success(),
            TripStatus::Saved => "saved".info(),
            TripStatus::Discovered => "discovered".dim(),
        };
        println!();
        println!(
            "On your board: {status} · {} vote(s) · added {}",
            copy.votes,
            copy.timestamp.format("%Y-%m-%d")
        );
        if let Some(done) = copy.completion_date {
            println!("Completed on {}", done.format("%Y-%m-%d"));
        }
    }
}
