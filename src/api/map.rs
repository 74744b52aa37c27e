use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use super::{ApiQuery, AppState};
use crate::map::{BoundingBox, PanDirection, Viewport};
use crate::models::Coordinates;
use crate::{Result, TravelGemsError};

#[derive(Debug, Deserialize)]
pub struct ViewportParams {
    lat: Option<f64>,
    lng: Option<f64>,
    zoom: Option<i32>,
    /// Zoom button press, applied after `zoom`
    delta: Option<i32>,
    pan: Option<PanDirection>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportResponse {
    center: Coordinates,
    zoom: u8,
    bounding_box: BoundingBox,
    embed_url: String,
    /// Only set by place lookups: false when the place has no coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    recentered: Option<bool>,
}

impl From<&Viewport> for ViewportResponse {
    fn from(viewport: &Viewport) -> Self {
        Self {
            center: viewport.center(),
            zoom: viewport.zoom(),
            bounding_box: viewport.bounding_box(),
            embed_url: viewport.embed_url(),
            recentered: None,
        }
    }
}

fn default_viewport(state: &AppState) -> Viewport {
    Viewport::new(
        Coordinates::new(state.map.default_latitude, state.map.default_longitude),
        state.map.default_zoom.into(),
    )
}

pub async fn viewport(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ViewportParams>,
) -> Result<Json<ViewportResponse>> {
    let defaults = default_viewport(&state);
    let center = Coordinates::new(
        params.lat.unwrap_or(defaults.center().latitude),
        params.lng.unwrap_or(defaults.center().longitude),
    );
    if !center.is_valid() {
        return Err(TravelGemsError::validation("map center is out of range"));
    }

    let mut viewport = Viewport::new(center, params.zoom.unwrap_or(defaults.zoom().into()));
    if let Some(delta) = params.delta {
        viewport.zoom_by(delta);
    }
    if let Some(direction) = params.pan {
        viewport.pan(direction);
    }

    Ok(Json(ViewportResponse::from(&viewport)))
}

pub async fn place_viewport(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ViewportResponse>> {
    let place = state
        .catalog
        .place(&id)
        .ok_or_else(|| TravelGemsError::not_found(format!("place '{id}'")))?;

    let mut viewport = default_viewport(&state);
    let recentered = viewport.recenter_on(place);

    Ok(Json(ViewportResponse {
        recentered: Some(recentered),
        ..ViewportResponse::from(&viewport)
    }))
}
