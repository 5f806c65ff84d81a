//! HTTP controller endpoints for the Servia web API.
//!
//! Controllers handle HTTP requests, validate inputs, interact with services,
//! and return appropriate HTTP responses. They integrate with tower-sessions
//! for session management and use utoipa for OpenAPI documentation.

pub mod activity;
pub mod admin;
pub mod auth;
pub mod cause;
pub mod util;
