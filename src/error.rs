//! Error types and handling for the `TravelGems` service

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the `TravelGems` service
#[derive(Error, Debug)]
pub enum TravelGemsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generative AI or other upstream API errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Upstream answered but the payload could not be understood
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Lookup of an unknown catalog entry
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// AI features are switched off because no credential was supplied
    #[error("Feature disabled: {message}")]
    Disabled { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TravelGemsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new disabled-feature error
    pub fn disabled<S: Into<String>>(message: S) -> Self {
        Self::Disabled {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelGemsError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TravelGemsError::Api { .. } | TravelGemsError::Parse { .. } => {
                "We couldn't generate your plan right now. Please try again.".to_string()
            }
            TravelGemsError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelGemsError::NotFound { message } => {
                format!("Not found: {message}")
            }
            TravelGemsError::Disabled { .. } => {
                "AI features are currently unavailable.".to_string()
            }
            TravelGemsError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TravelGemsError::General { message } => message.clone(),
        }
    }

    /// HTTP status used when this error crosses the API boundary
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TravelGemsError::Validation { .. } => StatusCode::BAD_REQUEST,
            TravelGemsError::NotFound { .. } => StatusCode::NOT_FOUND,
            TravelGemsError::Api { .. } | TravelGemsError::Parse { .. } => StatusCode::BAD_GATEWAY,
            TravelGemsError::Disabled { .. } => StatusCode::SERVICE_UNAVAILABLE,
            TravelGemsError::Config { .. }
            | TravelGemsError::Io { .. }
            | TravelGemsError::General { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for TravelGemsError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for TravelGemsError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl IntoResponse for TravelGemsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
