pub use super::account_details::Entity as AccountDetails;
pub use super::auth_data::Entity as AuthData;
pub use super::cause::Entity as Cause;
pub use super::cause_contact::Entity as CauseContact;
pub use super::cause_social::Entity as CauseSocial;
pub use super::donation::Entity as Donation;
pub use super::event::Entity as Event;
pub use super::feedback::Entity as Feedback;
pub use super::location::Entity as Location;
pub use super::ngo::Entity as Ngo;
pub use super::user::Entity as User;
pub use super::user_contact::Entity as UserContact;
pub use super::user_social::Entity as UserSocial;
pub use super::volunteer::Entity as Volunteer;
