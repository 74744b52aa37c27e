//! `TravelGems` - Hidden gems, artisans and AI itineraries for sustainable
//! regional tourism
//!
//! This library provides the static content catalogs, the view router state,
//! the map viewport calculator and the generative AI wrappers behind the
//! TravelGems web service.

pub mod ai;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod links;
pub mod map;
pub mod models;
pub mod shell;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use ai::{GenerativeProvider, GroundedAnswer, GroundedSearch, ItineraryPlanner};
pub use api::AppState;
pub use catalog::Catalog;
pub use config::TravelGemsConfig;
pub use error::TravelGemsError;
pub use map::Viewport;
pub use models::{Coordinates, Itinerary, ItineraryRequest, Place};
pub use shell::{Shell, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelGemsError>;
