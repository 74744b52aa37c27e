//! Map viewport calculation for the embedded map widget
//!
//! The widget is addressed purely by a bounding box and a marker, so the whole
//! map state is a center point plus an integer zoom level.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, Place};

pub const MIN_ZOOM: u8 = 12;
pub const MAX_ZOOM: u8 = 19;

/// Zoom level at which the half-width equals [`BASE_DELTA_DEGREES`]
pub const REFERENCE_ZOOM: u8 = 15;
pub const BASE_DELTA_DEGREES: f64 = 0.008;

const EMBED_BASE_URL: &str = "https://www.openstreetmap.org/export/embed.html";

/// Bounding box in (minLon, minLat, maxLon, maxLat) order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Comma-joined form expected by the `bbox` query parameter
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanDirection {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center: Coordinates,
    zoom: u8,
}

/// Clamp any requested zoom into the supported range
#[must_use]
pub fn clamp_zoom(zoom: i32) -> u8 {
    // The clamp guarantees the value fits in a u8
    zoom.clamp(i32::from(MIN_ZOOM), i32::from(MAX_ZOOM)) as u8
}

/// Angular half-width of the visible box at `zoom`
#[must_use]
pub fn half_width_degrees(zoom: u8) -> f64 {
    BASE_DELTA_DEGREES * 2f64.powi(i32::from(REFERENCE_ZOOM) - i32::from(zoom))
}

impl Viewport {
    #[must_use]
    pub fn new(center: Coordinates, zoom: i32) -> Self {
        Self {
            center,
            zoom: clamp_zoom(zoom),
        }
    }

    #[must_use]
    pub fn center(&self) -> Coordinates {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Apply a zoom button press; the result is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]
    pub fn zoom_by(&mut self, delta: i32) {
        self.zoom = clamp_zoom(i32::from(self.zoom).saturating_add(delta));
    }

    /// Move the center by one half-width
    pub fn pan(&mut self, direction: PanDirection) {
        let step = half_width_degrees(self.zoom);
        match direction {
            PanDirection::North => self.center.latitude = (self.center.latitude + step).min(90.0),
            PanDirection::South => self.center.latitude = (self.center.latitude - step).max(-90.0),
            PanDirection::East => self.center.longitude = wrap_longitude(self.center.longitude + step),
            PanDirection::West => self.center.longitude = wrap_longitude(self.center.longitude - step),
        }
    }

    /// Recenter on a place. Places without a coordinate leave the viewport untouched.
    pub fn recenter_on(&mut self, place: &Place) -> bool {
        match place.coordinates {
            Some(coordinates) => {
                self.center = coordinates;
                true
            }
            None => false,
        }
    }

    /// Latitude edges are clipped to the poles
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let delta = half_width_degrees(self.zoom);
        BoundingBox {
            min_lon: self.center.longitude - delta,
            min_lat: (self.center.latitude - delta).max(-90.0),
            max_lon: self.center.longitude + delta,
            max_lat: (self.center.latitude + delta).min(90.0),
        }
    }

    /// URL for the embedded map widget with the box and a marker on the center
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!(
            "{EMBED_BASE_URL}?bbox={}&layer=mapnik&marker={},{}",
            urlencoding::encode(&self.bounding_box().to_query_value()),
            self.center.latitude,
            self.center.longitude
        )
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}
