//! JSON API consumed by the frontend

mod catalog;
mod extract;
mod map;
mod planner;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get, routing::post};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::limit::RequestBodyLimitLayer;

use crate::ai::{GeminiClient, GenerativeProvider, GroundedSearch, ItineraryPlanner};
use crate::catalog::Catalog;
use crate::config::{MapConfig, TravelGemsConfig};
use crate::shell::{NavEntry, navigation};

pub use extract::{ApiJson, ApiQuery};

/// Request bodies are small JSON forms
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Shared, immutable-after-startup state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub planner: ItineraryPlanner,
    pub search: GroundedSearch,
    pub map: MapConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        provider: Option<Arc<dyn GenerativeProvider>>,
        map: MapConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            planner: ItineraryPlanner::new(provider.clone()),
            search: GroundedSearch::new(provider),
            map,
            started_at: Utc::now(),
        }
    }

    /// Wire the embedded catalog and, when a key is configured, the Gemini client
    pub fn from_config(config: &TravelGemsConfig) -> crate::Result<Self> {
        let provider: Option<Arc<dyn GenerativeProvider>> = if config.ai_enabled() {
            Some(Arc::new(GeminiClient::new(&config.ai)?))
        } else {
            tracing::warn!("No AI API key configured; planner and search run degraded");
            None
        };

        Ok(Self::new(Catalog::embedded()?, provider, config.map.clone()))
    }

    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.planner.is_enabled()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/views", get(views))
        .route("/places", get(catalog::list_places))
        .route("/places/{id}", get(catalog::get_place))
        .route("/artisans", get(catalog::list_artisans))
        .route("/restaurants", get(catalog::list_restaurants))
        .route("/bookings", get(catalog::list_bookings))
        .route("/packages", get(catalog::list_packages))
        .route("/planner/options", get(planner::planner_options))
        .route("/itinerary", post(planner::generate_itinerary))
        .route("/search", post(planner::grounded_search))
        .route("/map/viewport", get(map::viewport))
        .route("/map/places/{id}", get(map::place_viewport))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    version: &'static str,
    started_at: DateTime<Utc>,
    ai_enabled: bool,
}

async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: crate::VERSION,
        started_at: state.started_at,
        ai_enabled: state.ai_enabled(),
    })
}

async fn views(State(state): State<AppState>) -> Json<Vec<NavEntry>> {
    Json(navigation(state.ai_enabled()))
}
