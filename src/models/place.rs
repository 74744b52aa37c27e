//! Hidden-gem place model

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A lesser-known point of interest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub image_url: String,
    pub crowd_level: CrowdLevel,
    /// Places without a stored coordinate cannot be recentered on
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Nature,
    Heritage,
    Spiritual,
    Lake,
    Village,
}

/// Typical visitor density
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Moderate,
    High,
}

impl Place {
    /// Distance from `origin`, if this place has a coordinate
    #[must_use]
    pub fn distance_from(&self, origin: &Coordinates) -> Option<f64> {
        self.coordinates.map(|c| c.distance_km(origin))
    }
}
