//! Shared fixtures for the API tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use travelgems::ai::{ChunkSource, GroundingChunk};
use travelgems::config::MapConfig;
use travelgems::{
    AppState, Catalog, Coordinates, GenerativeProvider, GroundedAnswer, Result, TravelGemsError,
    web,
};

/// What the fake provider answers with
#[derive(Clone)]
pub enum Script {
    /// Structured calls return this text; grounded calls return a one-chunk answer
    Succeed(String),
    /// Every call fails like a dropped connection
    Fail,
}

pub struct FakeProvider {
    script: Script,
    pub structured_calls: AtomicUsize,
    pub grounded_calls: AtomicUsize,
    /// Location bias passed to the most recent grounded call
    pub last_bias: Mutex<Option<Coordinates>>,
}

impl FakeProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            structured_calls: AtomicUsize::new(0),
            grounded_calls: AtomicUsize::new(0),
            last_bias: Mutex::new(None),
        })
    }

    pub fn last_bias(&self) -> Option<Coordinates> {
        *self.last_bias.lock().unwrap()
    }

    pub fn calls(&self) -> usize {
        self.structured_calls.load(Ordering::SeqCst) + self.grounded_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeProvider for FakeProvider {
    async fn generate_structured(&self, _prompt: &str, _schema: &Value) -> Result<String> {
        self.structured_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Succeed(text) => Ok(text.clone()),
            Script::Fail => Err(TravelGemsError::api("connection refused")),
        }
    }

    async fn generate_grounded(
        &self,
        prompt: &str,
        bias: Option<Coordinates>,
    ) -> Result<GroundedAnswer> {
        self.grounded_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_bias.lock().unwrap() = bias;
        match &self.script {
            Script::Succeed(_) => Ok(GroundedAnswer {
                text: format!("answer to: {}", prompt.lines().last().unwrap_or_default()),
                chunks: vec![GroundingChunk {
                    source: ChunkSource::Maps,
                    title: Some("Kukkarahalli Lake".to_string()),
                    uri: Some("https://maps.example/kukkarahalli".to_string()),
                }],
            }),
            Script::Fail => Err(TravelGemsError::api("connection refused")),
        }
    }
}

pub fn app_with(provider: Option<Arc<FakeProvider>>) -> Router {
    let provider = provider.map(|p| p as Arc<dyn GenerativeProvider>);
    let state = AppState::new(
        Catalog::embedded().expect("embedded catalog"),
        provider,
        MapConfig::default(),
    );
    web::app(state, "tests/no-frontend")
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
