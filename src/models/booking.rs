//! Hotel and vehicle booking items

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    pub id: String,
    pub name: String,
    pub kind: BookingKind,
    /// Display string, e.g. "₹2,400 / night"
    pub price: String,
    pub rating: f32,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingKind {
    Hotel,
    Vehicle,
}
