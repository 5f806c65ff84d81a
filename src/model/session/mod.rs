//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions, with methods for inserting, retrieving, and clearing the
//! logged-in identity.

pub mod auth;
