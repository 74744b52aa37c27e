//! Tour package model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    pub id: String,
    pub name: String,
    pub tier: PackageTier,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackageTier {
    Essential,
    Explorer,
    Immersive,
}
