//! Prompt and response-schema construction for the trip generator.
//!
//! The prompt text and the JSON schema are an external-service contract:
//! they mirror what the generator was tuned against and should not be
//! reworded casually.

use serde_json::{Value, json};

use crate::domain::preferences::Preferences;

/// Builds the generation prompt from the preference set.
pub(crate) fn build(prefs: &Preferences, trip_count: usize) -> String {
    let location = prefs.coords.map_or_else(String::new, |c| {
        format!(" (Located at approx {}, {})", c.latitude, c.longitude)
    });

    format!(
        "Act as a brutally honest local weekend travel expert for India.\n\
         Current City: {city}{location}\n\
         Target Budget: {budget}\n\
         Trip Vibe: {vibe}\n\
         Travelers: {trip_type}\n\
         Preferred Mode: {mode}\n\
         \n\
         Generate {trip_count} realistic, high-quality weekend trip options (no flights).\n\
         \n\
         STRUCTURED ITINERARY REQUIRED:\n\
         For each day, provide a structured schedule with 'Morning', 'Afternoon', and \
         'Evening' blocks. Each block should have an 'activity' and a brief 'note'.\n\
         \n\
         COST BREAKDOWN REQUIRED:\n\
         Estimate the split for: Stay, Travel, Food, and Misc within the budget {budget}.\n\
         \n\
         CRITICAL: Use the Google Search tool to find 3-5 AUTHENTIC, REAL-WORLD photos for \
         each destination. Return the image URLs and their source website URLs.\n\
         \n\
         REQUIRED ANTI-INFLUENCER FEATURES:\n\
         - \"notForEveryone\": Brutally honest warning.\n\
         - \"weatherSensitivity\": Impact of weather on plans.\n\
         - \"userStories\": 2 short, anonymous text-only \"raw\" experiences.\n\
         - \"nudgeReason\": Specific reason for THIS weekend.\n\
         \n\
         Focus on authenticity and honesty. Use casual, Gen-Z friendly language.",
        city = prefs.city,
        budget = prefs.budget,
        vibe = prefs.vibe,
        trip_type = prefs.trip_type,
        mode = prefs.travel_mode,
    )
}

/// The response schema the generator is constrained to.
///
/// This is the camelCase shape [`crate::domain::TripPayload`] deserializes
/// from.
pub(crate) fn response_schema() -> Value {
    let string = json!({"type": "STRING"});
    let number = json!({"type": "NUMBER"});

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": string,
                "destination": string,
                "destinationMapsUrl": string,
                "whyFits": string,
                "distance": number,
                "travelTime": string,
                "budgetRange": string,
                "costBreakdown": {
                    "type": "OBJECT",
                    "properties": {
                        "stay": string,
                        "travel": string,
                        "food": string,
                        "misc": string
                    },
                    "required": ["stay", "travel", "food", "misc"]
                },
                "crowdLevel": {"type": "STRING", "enum": ["Low", "Medium", "High"]},
                "weather": {"type": "STRING", "enum": ["sunny", "cloudy", "rainy", "cool"]},
                "weatherSensitivity": string,
                "bestTime": string,
                "staySuggestion": string,
                "experiences": {"type": "ARRAY", "items": string},
                "foodHighlight": string,
                "realityScore": number,
                "tag": {"type": "STRING", "enum": ["Overrated", "Underrated"]},
                "notForEveryone": string,
                "costStats": string,
                "nudgeReason": string,
                "images": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {"url": string, "sourceUrl": string},
                        "required": ["url", "sourceUrl"]
                    }
                },
                "itinerary": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "day": number,
                            "title": string,
                            "items": {
                                "type": "ARRAY",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "time": {
                                            "type": "STRING",
                                            "enum": ["Morning", "Afternoon", "Evening"]
                                        },
                                        "activity": string,
                                        "note": string
                                    },
                                    "required": ["time", "activity"]
                                }
                            }
                        },
                        "required": ["day", "title", "items"]
                    }
                },
                "hotels": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": string,
                            "type": string,
                            "approxPrice": string,
                            "mapsUrl": string
                        },
                        "required": ["name", "type", "approxPrice", "mapsUrl"]
                    }
                },
                "userStories": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {"text": string, "username": string, "date": string},
                        "required": ["text", "username", "date"]
                    }
                }
            },
            "required": [
                "id", "destination", "destinationMapsUrl", "whyFits", "distance",
                "travelTime", "budgetRange", "costBreakdown", "crowdLevel", "weather",
                "weatherSensitivity", "bestTime", "staySuggestion", "experiences",
                "foodHighlight", "realityScore", "costStats", "nudgeReason",
                "itinerary", "hotels", "userStories", "notForEveryone", "images"
            ]
        }
    })
}
