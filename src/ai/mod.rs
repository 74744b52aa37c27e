//! Generative AI integration
//!
//! The site needs exactly two capabilities from a text-generation backend:
//! - structured generation: prompt plus a JSON response schema, answer is JSON text
//! - grounded generation: prompt answered with map/location citations
//!
//! [`GenerativeProvider`] is the port for both; [`gemini::GeminiClient`] is the
//! only implementation. The two wrappers on top deliberately differ in failure
//! handling: [`itinerary::ItineraryPlanner`] fails hard, [`search::GroundedSearch`]
//! degrades to a fixed fallback answer.

pub mod gemini;
pub mod itinerary;
pub mod search;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::models::Coordinates;

pub use gemini::GeminiClient;
pub use itinerary::ItineraryPlanner;
pub use search::{GroundedSearch, SEARCH_FALLBACK_TEXT};

#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate text constrained to `schema`; returns the raw JSON text.
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String>;

    /// Generate an answer grounded in map data, optionally biased toward `bias`.
    async fn generate_grounded(
        &self,
        prompt: &str,
        bias: Option<Coordinates>,
    ) -> Result<GroundedAnswer>;
}

/// Text answer plus the citations backing it, in service order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub text: String,
    pub chunks: Vec<GroundingChunk>,
}

/// A citation linking part of an answer to a location or page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    pub source: ChunkSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSource {
    Maps,
    Web,
    Unknown,
}
