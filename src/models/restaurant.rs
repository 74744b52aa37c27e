//! Food guide model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub diet: Diet,
    pub cuisine: String,
    pub specialty: String,
    pub rating: f32,
    pub price_tier: PriceTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Veg,
    NonVeg,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    Budget,
    Moderate,
    Premium,
}

impl Diet {
    /// Whether a restaurant with this diet serves guests asking for `wanted`
    #[must_use]
    pub fn serves(self, wanted: Diet) -> bool {
        self == wanted || self == Diet::Both
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_serves() {
        assert!(Diet::Veg.serves(Diet::Veg));
        assert!(Diet::Both.serves(Diet::Veg));
        assert!(Diet::Both.serves(Diet::NonVeg));
        assert!(!Diet::Veg.serves(Diet::NonVeg));
        assert!(!Diet::NonVeg.serves(Diet::Veg));
    }
}
