//! Itinerary request and the AI-generated day plan
//!
//! An [`Itinerary`] is never persisted: each generation replaces the previous one
//! wholesale.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{Result, TravelGemsError};

/// Shortest and longest trip the planner accepts, in days
pub const MIN_TRIP_DAYS: u8 = 1;
pub const MAX_TRIP_DAYS: u8 = 5;

/// Fixed interest vocabulary offered by the planner form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Interest {
    Nature,
    Heritage,
    Food,
    Crafts,
    Wildlife,
    Spirituality,
    Adventure,
    Photography,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum TravelerGroup {
    Solo,
    Couple,
    Family,
    Friends,
}

/// Planner form input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub days: u8,
    pub interests: Vec<Interest>,
    pub traveler_group: TravelerGroup,
}

impl ItineraryRequest {
    /// Check the request and collapse duplicate interests, keeping first-seen order.
    pub fn validated(mut self) -> Result<Self> {
        if self.interests.is_empty() {
            return Err(TravelGemsError::validation(
                "select at least one interest",
            ));
        }

        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&self.days) {
            return Err(TravelGemsError::validation(format!(
                "trip length must be between {MIN_TRIP_DAYS} and {MAX_TRIP_DAYS} days"
            )));
        }

        let mut seen = Vec::with_capacity(self.interests.len());
        self.interests.retain(|interest| {
            if seen.contains(interest) {
                false
            } else {
                seen.push(*interest);
                true
            }
        });

        Ok(self)
    }
}

/// One scheduled activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub notes: String,
    pub is_sustainable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub title: String,
    pub items: Vec<ItineraryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_tips: Option<Vec<String>>,
}

impl Itinerary {
    /// Count of activities flagged as sustainable
    #[must_use]
    pub fn sustainable_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_sustainable).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(days: u8, interests: Vec<Interest>) -> ItineraryRequest {
        ItineraryRequest {
            days,
            interests,
            traveler_group: TravelerGroup::Couple,
        }
    }

    #[test]
    fn test_empty_interests_rejected() {
        let err = request(2, vec![]).validated().unwrap_err();
        assert!(matches!(err, TravelGemsError::Validation { .. }));
    }

    #[test]
    fn test_days_out_of_range_rejected() {
        assert!(request(0, vec![Interest::Food]).validated().is_err());
        assert!(request(6, vec![Interest::Food]).validated().is_err());
        assert!(request(5, vec![Interest::Food]).validated().is_ok());
    }

    #[test]
    fn test_duplicate_interests_collapsed() {
        let validated = request(
            3,
            vec![Interest::Food, Interest::Crafts, Interest::Food, Interest::Nature],
        )
        .validated()
        .unwrap();
        assert_eq!(
            validated.interests,
            vec![Interest::Food, Interest::Crafts, Interest::Nature]
        );
    }

    #[test]
    fn test_itinerary_parses_camel_case_without_tips() {
        let json = r#"{
            "title": "Slow Mysuru",
            "items": [
                {"time": "07:00", "activity": "Birding walk", "location": "Kukkarahalli Lake",
                 "notes": "Carry binoculars", "isSustainable": true},
                {"time": "12:30", "activity": "Lunch", "location": "Old town mess",
                 "notes": "Banana-leaf meal", "isSustainable": false}
            ]
        }"#;
        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.items.len(), 2);
        assert_eq!(itinerary.sustainable_count(), 1);
        assert!(itinerary.seasonal_tips.is_none());
        assert!(itinerary.safety_tips.is_none());
    }

    #[test]
    fn test_request_wire_format() {
        let json = r#"{"days": 2, "interests": ["Heritage", "Crafts"], "travelerGroup": "Family"}"#;
        let parsed: ItineraryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.days, 2);
        assert_eq!(parsed.traveler_group, TravelerGroup::Family);
        assert_eq!(parsed.interests, vec![Interest::Heritage, Interest::Crafts]);
    }
}
