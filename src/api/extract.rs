//! Extractors that report malformed input through [`TravelGemsError`]

use axum::extract::{FromRequest, FromRequestParts};

use crate::TravelGemsError;

/// JSON body; a bad body becomes a 400 with an `error` field
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(TravelGemsError))]
pub struct ApiJson<T>(pub T);

/// Query string; a bad parameter becomes a 400 with an `error` field
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(TravelGemsError))]
pub struct ApiQuery<T>(pub T);
