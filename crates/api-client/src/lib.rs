//! Typed HTTP client for the Otaku Corner backend.
//!
//! Wraps `reqwest` behind an [`ApiClient`] holding an explicit base URL, and
//! exposes one service module per resource. Every response body goes through
//! the `contracts` envelope parser before a caller sees it: backend-reported
//! errors come back as `ApiResponse::Failure` data, malformed bodies fail
//! fast as [`ClientError`] values.

pub mod config;
pub mod error;
pub mod http;
pub mod services;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ApiClient;
