//! Error types for the Stratos REST client.
//!
//! # Design
//! `NotFound` and `Unauthorized` get dedicated variants because command
//! handlers print them differently from a generic failure. Any other
//! non-success response is decoded into `Api` when the body carries the
//! server's error envelope, and falls back to `HttpError` with the raw body
//! when it does not.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by `StratosClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the addressed resource.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the credentials (401/403).
    #[error("authentication failed (HTTP {status})")]
    Unauthorized { status: u16 },

    /// A non-success response whose body decoded as an error envelope.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// A non-success response with an unrecognised body.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("could not connect to stratos manager: {0}")]
    Connection(String),

    #[error("TLS handshake failed: {0}")]
    Tls(String),

    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of a server-side failure, if there was a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Unauthorized { status }
            | ApiError::Api { status, .. }
            | ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body emitted by the Stratos REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The server wraps `ErrorBody` under an `Error` key; older endpoints
/// return it bare. Both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorEnvelope {
    Wrapped {
        #[serde(rename = "Error")]
        error: ErrorBody,
    },
    Bare(ErrorBody),
}

impl ErrorEnvelope {
    pub fn into_body(self) -> ErrorBody {
        match self {
            ErrorEnvelope::Wrapped { error } | ErrorEnvelope::Bare(error) => error,
        }
    }
}

/// Map a response that failed the success check to an `ApiError`.
pub(crate) fn decode_failure(status: u16, body: &str) -> ApiError {
    match status {
        404 => return ApiError::NotFound,
        401 | 403 => return ApiError::Unauthorized { status },
        _ => {}
    }
    match serde_json::from_str::<ErrorEnvelope>(body).map(ErrorEnvelope::into_body) {
        Ok(ErrorBody {
            error_code,
            error_message: Some(message),
        }) => ApiError::Api {
            status,
            code: error_code,
            message,
        },
        _ => ApiError::HttpError {
            status,
            body: body.to_string(),
        },
    }
}
