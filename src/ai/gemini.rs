//! Gemini REST client
//!
//! Talks to the `generateContent` endpoint of the generative language API.
//! One request per call: no retries, no caching.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{ChunkSource, GenerativeProvider, GroundedAnswer, GroundingChunk};
use crate::config::AiConfig;
use crate::models::Coordinates;
use crate::{Result, TravelGemsError};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    structured_model: String,
    grounded_model: String,
}

impl GeminiClient {
    /// Build a client from config. Fails when no API key is configured.
    pub fn new(config: &AiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TravelGemsError::config("AI API key is not configured"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("TravelGems/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelGemsError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            structured_model: config.itinerary_model.clone(),
            grounded_model: config.search_model.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    async fn generate(&self, model: &str, request: &GenerateContentRequest<'_>) -> Result<Candidate> {
        let start_time = Instant::now();

        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| TravelGemsError::api(format!("Generation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "Generation request rejected");
            return Err(TravelGemsError::api(format!(
                "Generative API error {status}: {error_text}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TravelGemsError::parse(format!("Failed to parse generation response: {e}")))?;

        let elapsed = start_time.elapsed();
        info!(model = %model, elapsed_ms = elapsed.as_millis() as u64, "Generation completed");
        if elapsed.as_secs() > 20 {
            warn!("Slow generation detected: {:.3}s", elapsed.as_secs_f64());
        }

        body.candidates
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| TravelGemsError::parse("Generation response has no candidates"))
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    #[instrument(skip_all, fields(model = %self.structured_model))]
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
            tools: None,
            tool_config: None,
        };

        let candidate = self.generate(&self.structured_model, &request).await?;
        candidate
            .text()
            .ok_or_else(|| TravelGemsError::parse("Generation response has no text"))
    }

    #[instrument(skip_all, fields(model = %self.grounded_model, biased = bias.is_some()))]
    async fn generate_grounded(
        &self,
        prompt: &str,
        bias: Option<Coordinates>,
    ) -> Result<GroundedAnswer> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: None,
            tools: Some(vec![Tool {
                google_maps: EmptyObject {},
            }]),
            tool_config: bias.map(|coordinates| ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: coordinates.latitude,
                        longitude: coordinates.longitude,
                    },
                },
            }),
        };

        let candidate = self.generate(&self.grounded_model, &request).await?;
        let text = candidate
            .text()
            .ok_or_else(|| TravelGemsError::parse("Grounded response has no text"))?;

        let chunks: Vec<GroundingChunk> = candidate
            .grounding_metadata
            .and_then(|metadata| metadata.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .map(GroundingChunk::from)
            .collect();

        debug!("Grounded answer carries {} chunks", chunks.len());
        Ok(GroundedAnswer { text, chunks })
    }
}

// Wire types for the generateContent endpoint

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

impl<'a> Content<'a> {
    fn user(text: &'a str) -> Self {
        Self {
            role: "user",
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

impl Candidate {
    /// Concatenated text of all parts, `None` when there is none
    fn text(&self) -> Option<String> {
        let text: String = self
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    grounding_chunks: Option<Vec<RawGroundingChunk>>,
}

#[derive(Debug, Deserialize)]
struct RawGroundingChunk {
    maps: Option<ChunkReference>,
    web: Option<ChunkReference>,
}

#[derive(Debug, Deserialize)]
struct ChunkReference {
    uri: Option<String>,
    title: Option<String>,
}

impl From<RawGroundingChunk> for GroundingChunk {
    fn from(raw: RawGroundingChunk) -> Self {
        let (source, reference) = match (raw.maps, raw.web) {
            (Some(maps), _) => (ChunkSource::Maps, Some(maps)),
            (None, Some(web)) => (ChunkSource::Web, Some(web)),
            (None, None) => (ChunkSource::Unknown, None),
        };
        let (title, uri) = reference.map_or((None, None), |r| (r.title, r.uri));
        GroundingChunk { source, title, uri }
    }
}
