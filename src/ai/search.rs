//! Maps-grounded local search
//!
//! Failures never reach the caller: any error, or a disabled provider, turns
//! into [`SEARCH_FALLBACK_TEXT`] with no citations.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{GenerativeProvider, GroundedAnswer};
use crate::models::Coordinates;

pub const SEARCH_FALLBACK_TEXT: &str =
    "Sorry, I couldn't connect to the local guide right now. Please try again in a moment.";

#[derive(Clone)]
pub struct GroundedSearch {
    provider: Option<Arc<dyn GenerativeProvider>>,
}

impl GroundedAnswer {
    /// The degraded answer shown when the grounded call fails
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: SEARCH_FALLBACK_TEXT.to_string(),
            chunks: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.text == SEARCH_FALLBACK_TEXT && self.chunks.is_empty()
    }
}

impl GroundedSearch {
    pub fn new(provider: Option<Arc<dyn GenerativeProvider>>) -> Self {
        Self { provider }
    }

    #[instrument(skip_all, fields(biased = location.is_some()))]
    pub async fn search(&self, query: &str, location: Option<Coordinates>) -> GroundedAnswer {
        let Some(provider) = &self.provider else {
            warn!("Grounded search requested while AI is disabled");
            return GroundedAnswer::fallback();
        };

        match provider.generate_grounded(&build_prompt(query), location).await {
            Ok(answer) => {
                info!(chunks = answer.chunks.len(), "Grounded search answered");
                answer
            }
            Err(e) => {
                warn!("Grounded search failed, serving fallback: {}", e);
                GroundedAnswer::fallback()
            }
        }
    }
}

#[must_use]
pub fn build_prompt(query: &str) -> String {
    format!(
        "You are a local guide for sustainable travel around Mysuru. \
         Answer the traveller's question with specific, lesser-known places and \
         family-run businesses where possible, and mention how to reach them.\n\
         Question: {}",
        query.trim()
    )
}
