//! Server application core modules.
//!
//! This crate contains all server-side functionality for the Servia donation
//! platform, including HTTP routing, registration and login, admin account
//! verification, cascading deletion, and the public cause listing. State lives
//! in a relational store accessed through SeaORM; request handlers are Axum
//! controllers layered over services and repositories.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
