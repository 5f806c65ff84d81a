pub mod account_details;
pub mod auth_data;
pub mod cause;
pub mod cause_contact;
pub mod cause_social;
pub mod donation;
pub mod event;
pub mod feedback;
pub mod location;
pub mod ngo;
pub mod prelude;
pub mod user;
pub mod user_contact;
pub mod user_social;
pub mod volunteer;
