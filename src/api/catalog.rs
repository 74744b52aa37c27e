use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use super::{ApiQuery, AppState};
use crate::catalog::PlaceQuery;
use crate::links::ContactLinks;
use crate::models::{
    Artisan, BookingItem, BookingKind, Category, Coordinates, CrowdLevel, Diet, Place, Restaurant,
    TourPackage,
};
use crate::{Result, TravelGemsError};

#[derive(Debug, Deserialize)]
pub struct PlaceParams {
    category: Option<Category>,
    crowd: Option<CrowdLevel>,
    /// `lat,lng`
    near: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    #[serde(flatten)]
    place: Place,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
}

pub async fn list_places(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PlaceParams>,
) -> Result<Json<Vec<PlaceSummary>>> {
    let near = params
        .near
        .as_deref()
        .map(|raw| {
            Coordinates::parse_pair(raw).ok_or_else(|| {
                TravelGemsError::validation(format!("'{raw}' is not a lat,lng pair"))
            })
        })
        .transpose()?;

    let query = PlaceQuery {
        category: params.category,
        crowd: params.crowd,
        near,
    };

    let places = state
        .catalog
        .search_places(&query)
        .into_iter()
        .map(|place| PlaceSummary {
            distance_km: near.and_then(|origin| place.distance_from(&origin)),
            place: place.clone(),
        })
        .collect();

    Ok(Json(places))
}

pub async fn get_place(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Place>> {
    state
        .catalog
        .place(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| TravelGemsError::not_found(format!("place '{id}'")))
}

#[derive(Serialize)]
pub struct ArtisanCard {
    #[serde(flatten)]
    artisan: Artisan,
    links: ContactLinks,
}

pub async fn list_artisans(State(state): State<AppState>) -> Json<Vec<ArtisanCard>> {
    Json(
        state
            .catalog
            .artisans()
            .iter()
            .map(|artisan| ArtisanCard {
                links: ContactLinks::from(artisan),
                artisan: artisan.clone(),
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub struct RestaurantParams {
    diet: Option<Diet>,
}

pub async fn list_restaurants(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RestaurantParams>,
) -> Json<Vec<Restaurant>> {
    Json(
        state
            .catalog
            .restaurants(params.diet)
            .into_iter()
            .cloned()
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub struct BookingParams {
    kind: Option<BookingKind>,
}

pub async fn list_bookings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<BookingParams>,
) -> Json<Vec<BookingItem>> {
    Json(
        state
            .catalog
            .bookings(params.kind)
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub async fn list_packages(State(state): State<AppState>) -> Json<Vec<TourPackage>> {
    Json(state.catalog.packages().to_vec())
}
