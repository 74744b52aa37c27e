//! Data models for the TravelGems service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates
//! - Place, Artisan, Restaurant, Booking, Package: the hand-authored catalogs
//! - Itinerary: the transient AI-generated day plan and its request

pub mod artisan;
pub mod booking;
pub mod itinerary;
pub mod location;
pub mod package;
pub mod place;
pub mod restaurant;

// Re-export all public types for convenient access
pub use artisan::Artisan;
pub use booking::{BookingItem, BookingKind};
pub use itinerary::{Interest, Itinerary, ItineraryItem, ItineraryRequest, TravelerGroup};
pub use location::Coordinates;
pub use package::{PackageTier, TourPackage};
pub use place::{Category, CrowdLevel, Place};
pub use restaurant::{Diet, PriceTier, Restaurant};
