//! Synchronous REST client core for the Stratos management API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! round-trip through a `Transport`, keeping the core deterministic and
//! testable.
//!
//! # Design
//! - `StratosClient` holds only the base URL and optional Basic credentials.
//! - Each administrative action is split into `build_*` (produces request)
//!   and `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Paths come from the typed `Endpoint` catalogue; nothing is spliced into
//!   URL strings by hand.
//! - Non-success responses are decoded into `ApiError`, carrying the
//!   server's error message when the body has one.

pub mod client;
pub mod definition;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

pub use client::{Credentials, StratosClient};
pub use definition::Definition;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
