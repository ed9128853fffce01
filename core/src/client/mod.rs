//! Stateless HTTP request builder and response parser for the Stratos API.
//!
//! # Design
//! `StratosClient` holds the base URL and optional credentials and carries
//! no mutable state between calls. Operations are grouped by resource in the
//! submodules; each adds `build_*` methods producing an `HttpRequest` and
//! `parse_*` methods consuming an `HttpResponse`. Write operations that only
//! acknowledge share the `parse_created` / `parse_updated` /
//! `parse_accepted` / `parse_deleted` parsers below.

mod application;
mod cartridge;
mod kubernetes;
mod metadata;
mod partition;
mod policy;
mod service;
mod session;
mod subscription;
mod tenant;
mod user;

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::envelope::{decode_enveloped, decode_enveloped_list};
use crate::error::{decode_failure, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub(crate) const STATUS_OK: u16 = 200;
pub(crate) const STATUS_CREATED: u16 = 201;
pub(crate) const STATUS_NO_CONTENT: u16 = 204;

/// Username and password sent as HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value of the `authorization` header.
    pub fn basic_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Synchronous, stateless client for the Stratos management API.
#[derive(Debug, Clone)]
pub struct StratosClient {
    base_url: String,
    credentials: Option<Credentials>,
}

impl StratosClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    /// Absolute URL of an endpoint.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn request(&self, method: HttpMethod, endpoint: &Endpoint, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if let Some(credentials) = &self.credentials {
            headers.push(("authorization".to_string(), credentials.basic_header()));
        }
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            path: self.url(endpoint),
            headers,
            body,
        }
    }

    pub(crate) fn get(&self, endpoint: &Endpoint) -> HttpRequest {
        self.request(HttpMethod::Get, endpoint, None)
    }

    pub(crate) fn delete(&self, endpoint: &Endpoint) -> HttpRequest {
        self.request(HttpMethod::Delete, endpoint, None)
    }

    /// POST with an empty body, used by action endpoints.
    pub(crate) fn post_empty(&self, endpoint: &Endpoint) -> HttpRequest {
        self.request(HttpMethod::Post, endpoint, None)
    }

    pub(crate) fn send_json<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(method, endpoint, Some(body)))
    }

    /// Acknowledgement of a create (201).
    pub fn parse_created(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_CREATED)
    }

    /// Acknowledgement of an update (200).
    pub fn parse_updated(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_OK)
    }

    /// Acknowledgement of an action such as activate or synchronize (200).
    pub fn parse_accepted(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_OK)
    }

    /// Acknowledgement of a delete (204).
    pub fn parse_deleted(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_NO_CONTENT)
    }
}

/// Map a non-matching status code to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(decode_failure(response.status, &response.body))
}

pub(crate) fn parse_one<T: DeserializeOwned>(
    response: HttpResponse,
    envelope: &str,
) -> Result<T, ApiError> {
    check_status(&response, STATUS_OK)?;
    decode_enveloped(&response.body, envelope)
}

pub(crate) fn parse_many<T: DeserializeOwned>(
    response: HttpResponse,
    envelope: &str,
) -> Result<Vec<T>, ApiError> {
    check_status(&response, STATUS_OK)?;
    decode_enveloped_list(&response.body, envelope)
}
