//! Business logic services.
//!
//! Services coordinate repositories and hold the multi-step workflows:
//! registration (identity plus profile row in one transaction), login
//! verification, admin verification mirroring, cascading deletion, and
//! assembly of the public cause listing.

pub mod activity;
pub mod admin;
pub mod auth;
pub mod cause;
pub mod registration;

/// Whether a database error is a unique constraint violation.
pub(crate) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
