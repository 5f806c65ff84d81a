//! Database repositories.
//!
//! Repositories wrap SeaORM queries for a single table family and return plain
//! `DbErr` results; services wrap them into the application error type. Every
//! repository is generic over the connection so the same queries run on a
//! pooled connection or inside a transaction.

pub mod activity;
pub mod auth;
pub mod cause;
pub mod subtype;
pub mod user;

pub use activity::{DonationRepository, FeedbackRepository, VolunteerRepository};
pub use auth::AuthRepository;
pub use cause::CauseRepository;
pub use subtype::{EventRepository, NgoRepository};
pub use user::UserRepository;
