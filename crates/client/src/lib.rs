//! REST gateway for desktop front-ends.
//!
//! [`ApiClient`] is a thin translation layer over the crewdesk HTTP API:
//! it builds requests (query params, JSON, or plain-text bodies, matching
//! each endpoint's wire format), deserializes 2xx bodies into the structs
//! in [`model`], and maps everything else onto [`ClientError`].
//!
//! The client carries no global state; construct one with
//! [`ApiClient::new`] and pass it to whatever owns the UI.

pub mod client;
pub mod error;
pub mod model;

pub use client::ApiClient;
pub use error::ClientError;
