use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::{ApiJson, AppState};
use crate::ai::GroundedAnswer;
use crate::models::itinerary::{MAX_TRIP_DAYS, MIN_TRIP_DAYS};
use crate::models::{Coordinates, Interest, Itinerary, ItineraryRequest, TravelerGroup};
use crate::{Result, TravelGemsError};

/// Choices offered by the planner form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerOptions {
    min_days: u8,
    max_days: u8,
    interests: Vec<Interest>,
    traveler_groups: Vec<TravelerGroup>,
    enabled: bool,
}

pub async fn planner_options(State(state): State<AppState>) -> Json<PlannerOptions> {
    Json(PlannerOptions {
        min_days: MIN_TRIP_DAYS,
        max_days: MAX_TRIP_DAYS,
        interests: Interest::iter().collect(),
        traveler_groups: TravelerGroup::iter().collect(),
        enabled: state.ai_enabled(),
    })
}

pub async fn generate_itinerary(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ItineraryRequest>,
) -> Result<Json<Itinerary>> {
    state.planner.generate(request).await.map(Json)
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    query: String,
    #[serde(default)]
    location: Option<Coordinates>,
}

/// Answers 200 for every non-blank query, degraded or not
pub async fn grounded_search(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<GroundedAnswer>> {
    if request.query.trim().is_empty() {
        return Err(TravelGemsError::validation("search query cannot be empty"));
    }

    let location = request.location.filter(Coordinates::is_valid);
    Ok(Json(state.search.search(&request.query, location).await))
}
