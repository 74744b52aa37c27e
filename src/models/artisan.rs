//! Artisan directory model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: String,
    pub name: String,
    pub craft: String,
    /// Narrative shown on the artisan card
    pub story: String,
    pub location: String,
    pub phone: String,
    /// Curated map link. When absent a map search on `location` is used.
    #[serde(default)]
    pub map_link: Option<String>,
}
