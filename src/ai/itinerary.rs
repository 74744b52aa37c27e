//! Itinerary generation
//!
//! Validation happens before anything leaves the process: an empty interest
//! set or an out-of-range trip length never reaches the provider. Any failure
//! after that fails the whole call; there is no partial itinerary.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{info, instrument};

use super::GenerativeProvider;
use crate::models::{Itinerary, ItineraryRequest};
use crate::{Result, TravelGemsError};

#[derive(Clone)]
pub struct ItineraryPlanner {
    provider: Option<Arc<dyn GenerativeProvider>>,
}

impl ItineraryPlanner {
    /// `None` means AI is disabled; every generation then fails with `Disabled`.
    pub fn new(provider: Option<Arc<dyn GenerativeProvider>>) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    #[instrument(skip_all, fields(days = request.days, group = %request.traveler_group))]
    pub async fn generate(&self, request: ItineraryRequest) -> Result<Itinerary> {
        let request = request.validated()?;

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| TravelGemsError::disabled("itinerary generation needs an AI API key"))?;

        let prompt = build_prompt(&request);
        let text = provider
            .generate_structured(&prompt, &itinerary_schema())
            .await?;
        let itinerary = parse_itinerary(&text)?;

        info!(
            items = itinerary.items.len(),
            sustainable = itinerary.sustainable_count(),
            "Generated itinerary"
        );
        Ok(itinerary)
    }
}

/// Natural-language instruction for one planner submission
#[must_use]
pub fn build_prompt(request: &ItineraryRequest) -> String {
    let interests = request
        .interests
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a {days}-day sustainable travel itinerary around Mysuru, Karnataka \
         for a {group} trip. Interests: {interests}.\n\
         Rules:\n\
         - Avoid marquee attractions at their peak hours; if one is included, schedule it early or late.\n\
         - Prefer decentralized, local experiences: villages, artisans, family-run eateries, nature spots.\n\
         - Mark each activity as sustainable when it supports local communities or has a low footprint.\n\
         - Include 3-4 seasonal tips and 3-4 safety tips.\n\
         Give each activity a time, the activity, its location and short practical notes.",
        days = request.days,
        group = request.traveler_group.to_string().to_lowercase(),
    )
}

/// Response schema declared to the provider
#[must_use]
pub fn itinerary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING"},
            "seasonalTips": {"type": "ARRAY", "items": {"type": "STRING"}},
            "safetyTips": {"type": "ARRAY", "items": {"type": "STRING"}},
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "time": {"type": "STRING"},
                        "activity": {"type": "STRING"},
                        "location": {"type": "STRING"},
                        "notes": {"type": "STRING"},
                        "isSustainable": {"type": "BOOLEAN"}
                    },
                    "required": ["time", "activity", "location", "notes", "isSustainable"]
                }
            }
        },
        "required": ["title", "items"]
    })
}

pub fn parse_itinerary(text: &str) -> Result<Itinerary> {
    serde_json::from_str(text.trim())
        .map_err(|e| TravelGemsError::parse(format!("Itinerary response is not valid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interest, TravelerGroup};

    fn request() -> ItineraryRequest {
        ItineraryRequest {
            days: 3,
            interests: vec![Interest::Crafts, Interest::Food],
            traveler_group: TravelerGroup::Family,
        }
    }

    #[test]
    fn test_prompt_embeds_inputs_and_rules() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("3-day sustainable travel itinerary"));
        assert!(prompt.contains("Crafts, Food"));
        assert!(prompt.contains("family trip"));
        assert!(prompt.contains("peak hours"));
        assert!(prompt.contains("decentralized"));
        assert!(prompt.contains("3-4 seasonal tips and 3-4 safety tips"));
    }

    #[test]
    fn test_schema_requires_title_and_items() {
        let schema = itinerary_schema();
        assert_eq!(schema["required"], json!(["title", "items"]));
        assert_eq!(
            schema["properties"]["items"]["items"]["properties"]["isSustainable"]["type"],
            "BOOLEAN"
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_itinerary("{\"title\": \"half"),
            Err(TravelGemsError::Parse { .. })
        ));
        assert!(matches!(
            parse_itinerary("{\"items\": []}"),
            Err(TravelGemsError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_disabled_planner_still_validates_first() {
        let planner = ItineraryPlanner::new(None);

        let mut empty = request();
        empty.interests.clear();
        assert!(matches!(
            planner.generate(empty).await,
            Err(TravelGemsError::Validation { .. })
        ));

        assert!(matches!(
            planner.generate(request()).await,
            Err(TravelGemsError::Disabled { .. })
        ));
    }
}
