use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::preferences::TripType;

/// Where a trip sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Returned by the generator, not yet on the board.
    Discovered,
    /// On the board, not yet done.
    Saved,
    /// On the board and done.
    Completed,
}

/// Expected crowd level at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    /// Quiet.
    Low,
    /// Busy but bearable.
    Medium,
    /// Packed.
    High,
}

/// Expected weather over the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    /// Clear skies.
    Sunny,
    /// Overcast.
    Cloudy,
    /// Pack a raincoat.
    Rainy,
    /// Pleasant and cool.
    Cool,
}

/// The generator's honest verdict on the destination's reputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// Hype exceeds reality.
    Overrated,
    /// Reality exceeds hype.
    Underrated,
}

/// Time-of-day block within an itinerary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// Before lunch.
    Morning,
    /// Lunch to sundown.
    Afternoon,
    /// After sundown.
    Evening,
}

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    /// Which block of the day this belongs to.
    pub time: TimeOfDay,
    /// What to do.
    pub activity: String,
    /// Optional practical note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u32,
    /// Headline for the day.
    pub title: String,
    /// Morning/afternoon/evening blocks.
    pub items: Vec<ItineraryItem>,
}

/// Estimated cost split within the chosen budget band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Accommodation.
    pub stay: String,
    /// Getting there and back.
    pub travel: String,
    /// Food and drink.
    pub food: String,
    /// Everything else.
    pub misc: String,
}

/// A concrete place to stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSuggestion {
    /// Property name.
    pub name: String,
    /// Hostel, homestay, resort, and so on.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rough price per night.
    pub approx_price: String,
    /// Maps link.
    pub maps_url: String,
}

/// A short, raw first-hand account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStory {
    /// The account itself.
    pub text: String,
    /// Who said it.
    pub username: String,
    /// When, free text.
    pub date: String,
}

/// A destination photo with source attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripImage {
    /// Direct image URL.
    pub url: String,
    /// Page the image came from.
    pub source_url: String,
}

/// The payload the generator produces for one trip option.
///
/// Everything here is opaque to the core logic except `destination`, which
/// the board filter matches against. The wire format is camelCase JSON, the
/// same shape in the generator response and in the persisted board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPayload {
    /// Opaque identifier assigned by the generator, unique per board.
    pub id: String,
    /// Destination name.
    pub destination: String,
    /// Maps link for the destination.
    pub destination_maps_url: String,
    /// Why this trip fits the stated preferences.
    pub why_fits: String,
    /// Distance from the home city, in kilometres.
    pub distance: f64,
    /// Door-to-door travel time, free text.
    pub travel_time: String,
    /// Budget band this plan actually lands in.
    pub budget_range: String,
    /// Cost split estimate.
    pub cost_breakdown: CostBreakdown,
    /// Expected crowds.
    pub crowd_level: CrowdLevel,
    /// Expected weather.
    pub weather: Weather,
    /// How badly weather can wreck the plan.
    pub weather_sensitivity: String,
    /// Best season or time to go.
    pub best_time: String,
    /// One-line stay recommendation.
    pub stay_suggestion: String,
    /// Headline experiences.
    pub experiences: Vec<String>,
    /// The one thing to eat.
    pub food_highlight: String,
    /// 0–10 honesty rating, passed through unmodified.
    pub reality_score: f64,
    /// Overrated/underrated verdict, when the generator commits to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    /// Brutally honest warning about who will hate this trip.
    pub not_for_everyone: String,
    /// Cost context, free text.
    pub cost_stats: String,
    /// Why this specific weekend, not some other one.
    pub nudge_reason: String,
    /// Day-by-day schedule.
    pub itinerary: Vec<ItineraryDay>,
    /// Places to stay.
    pub hotels: Vec<HotelSuggestion>,
    /// Raw first-hand accounts.
    pub user_stories: Vec<UserStory>,
    /// Real-world photos with attribution.
    pub images: Vec<TripImage>,
}

/// A trip option with its lifecycle state.
///
/// The payload is produced by the generator; the remaining fields are
/// injected by the core after receipt and are the only fields it ever
/// mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// The generator payload, passed through opaquely.
    #[serde(flatten)]
    pub payload: TripPayload,
    /// When the record was created or saved.
    pub timestamp: DateTime<Utc>,
    /// The travelling party the generation was for.
    pub trip_type: TripType,
    /// Lifecycle state.
    pub status: TripStatus,
    /// Set once, when the trip is marked completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    /// Group-trip vote count. Only ever increases.
    #[serde(default)]
    pub votes: u32,
}

impl TripRecord {
    /// Wraps a freshly generated payload as a `discovered` record.
    #[must_use]
    pub const fn discovered(payload: TripPayload, trip_type: TripType, now: DateTime<Utc>) -> Self {
        Self {
            payload,
            timestamp: now,
            trip_type,
            status: TripStatus::Discovered,
            completion_date: None,
            votes: 0,
        }
    }

    /// The record's opaque identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.payload.id
    }

    /// The destination name.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.payload.destination
    }

    /// The instant date-window filtering measures from: the completion date
    /// for completed records that have one, the creation/save timestamp
    /// otherwise.
    #[must_use]
    pub fn reference_instant(&self) -> DateTime<Utc> {
        if self.status == TripStatus::Completed {
            self.completion_date.unwrap_or(self.timestamp)
        } else {
            self.timestamp
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    /// A minimal but fully populated record for store and filter tests.
    pub(crate) fn sample(id: &str, destination: &str) -> TripRecord {
        let payload = TripPayload {
            id: id.to_string(),
            destination: destination.to_string(),
            destination_maps_url: format!("https://maps.example/{id}"),
            why_fits: "Close, cheap, quiet.".to_string(),
            distance: 120.0,
            travel_time: "3h by road".to_string(),
            budget_range: "₹5k–₹8k".to_string(),
            cost_breakdown: CostBreakdown {
                stay: "₹2500".to_string(),
                travel: "₹1500".to_string(),
                food: "₹1800".to_string(),
                misc: "₹700".to_string(),
            },
            crowd_level: CrowdLevel::Low,
            weather: Weather::Cool,
            weather_sensitivity: "Fine in rain".to_string(),
            best_time: "Oct–Feb".to_string(),
            stay_suggestion: "Homestay near the lake".to_string(),
            experiences: vec!["Sunrise point".to_string()],
            food_highlight: "Misal".to_string(),
            reality_score: 7.5,
            tag: Some(Tag::Underrated),
            not_for_everyone: "No nightlife at all.".to_string(),
            cost_stats: "Most people spend ₹6k".to_string(),
            nudge_reason: "Clear skies this weekend".to_string(),
            itinerary: vec![ItineraryDay {
                day: 1,
                title: "Arrive and unwind".to_string(),
                items: vec![ItineraryItem {
                    time: TimeOfDay::Morning,
                    activity: "Drive up".to_string(),
                    note: None,
                }],
            }],
            hotels: vec![],
            user_stories: vec![],
            images: vec![],
        };
        TripRecord::discovered(payload, TripType::Solo, Utc::now())
    }

    #[test]
    fn reference_instant_prefers_completion_date() {
        let mut trip = sample("a", "Lonavala");
        let completed = Utc::now() - Duration::days(3);
        trip.status = TripStatus::Completed;
        trip.completion_date = Some(completed);
        assert_eq!(trip.reference_instant(), completed);
    }

    #[test]
    fn reference_instant_falls_back_to_timestamp() {
        let mut trip = sample("a", "Lonavala");
        trip.status = TripStatus::Completed;
        trip.completion_date = None;
        assert_eq!(trip.reference_instant(), trip.timestamp);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let trip = sample("a", "Lonavala");
        let json = serde_json::to_value(&trip).unwrap();
        assert!(json.get("destinationMapsUrl").is_some());
        assert!(json.get("realityScore").is_some());
        assert_eq!(json["status"], "discovered");
        assert_eq!(json["tripType"], "Solo");
        // Unset completion dates are omitted, matching the original payloads.
        assert!(json.get("completionDate").is_none());
    }

    #[test]
    fn votes_default_when_absent() {
        let mut json = serde_json::to_value(sample("a", "Lonavala")).unwrap();
        json.as_object_mut().unwrap().remove("votes");
        let trip: TripRecord = serde_json::from_value(json).unwrap();
        assert_eq!(trip.votes, 0);
    }
}
