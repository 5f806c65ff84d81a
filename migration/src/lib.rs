pub use sea_orm_migration::prelude::*;

mod m20250806_000001_auth_data;
mod m20250806_000002_user;
mod m20250806_000003_cause;
mod m20250806_000004_ngo;
mod m20250806_000005_event;
mod m20250806_000006_location;
mod m20250806_000007_user_links;
mod m20250806_000008_cause_links;
mod m20250806_000009_account_details;
mod m20250806_000010_donation;
mod m20250806_000011_feedback;
mod m20250806_000012_volunteer;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250806_000001_auth_data::Migration),
            Box::new(m20250806_000002_user::Migration),
            Box::new(m20250806_000003_cause::Migration),
            Box::new(m20250806_000004_ngo::Migration),
            Box::new(m20250806_000005_event::Migration),
            Box::new(m20250806_000006_location::Migration),
            Box::new(m20250806_000007_user_links::Migration),
            Box::new(m20250806_000008_cause_links::Migration),
            Box::new(m20250806_000009_account_details::Migration),
            Box::new(m20250806_000010_donation::Migration),
            Box::new(m20250806_000011_feedback::Migration),
            Box::new(m20250806_000012_volunteer::Migration),
        ]
    }
}
