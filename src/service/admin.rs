use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{AuthRepository, CauseRepository, EventRepository, NgoRepository, UserRepository},
    error::Error,
    model::{
        api::{AdminCauseDto, AdminUserDto, CauseType},
        role::Role,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the verified flag on an auth record and mirrors it onto the
    /// linked profile row.
    ///
    /// The profile is resolved through the `auth_id` back-reference, never by
    /// name. Both writes happen in one transaction so the flags cannot
    /// diverge.
    pub async fn set_verified(&self, auth_id: i32, verified: bool) -> Result<(), Error> {
        self.db
            .transaction::<_, (), Error>(move |txn| {
                Box::pin(async move {
                    let auth = AuthRepository::new(txn)
                        .set_verified(auth_id, verified)
                        .await?
                        .ok_or(Error::NotFound("auth record"))?;

                    match auth.role.parse::<Role>() {
                        Ok(Role::User) => {
                            UserRepository::new(txn)
                                .set_verified_by_auth_id(auth.id, verified)
                                .await?;
                        }
                        Ok(Role::Ngo) | Ok(Role::Event) => {
                            CauseRepository::new(txn)
                                .set_verified_by_auth_id(auth.id, verified)
                                .await?;
                        }
                        // Admin accounts have no profile row to mirror onto.
                        Ok(Role::Admin) => {}
                        Err(()) => {
                            return Err(Error::InternalError(format!(
                                "auth record {} carries unknown role {:?}",
                                auth.id, auth.role
                            )))
                        }
                    }

                    Ok(())
                })
            })
            .await
            .map_err(Error::from_transaction)
    }

    /// Deletes a user together with every cause it owns and all dependent
    /// rows.
    ///
    /// Owned causes reference their own auth rows, so those are deleted first
    /// and the declared cascades clean up each cause with its subtype,
    /// locations, contacts, socials, donations, feedback, volunteers, and
    /// account details. Deleting the user's auth row then removes the user
    /// profile and its dependents the same way. Runs in one transaction so a
    /// mid-cascade failure leaves no orphans.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        self.db
            .transaction::<_, (), Error>(move |txn| {
                Box::pin(async move {
                    let user = UserRepository::new(txn)
                        .get_by_id(user_id)
                        .await?
                        .ok_or(Error::NotFound("user"))?;

                    let causes = CauseRepository::new(txn)
                        .get_owned_by_user(user.user_id)
                        .await?;

                    let auth_repository = AuthRepository::new(txn);
                    for cause in causes {
                        auth_repository.delete(cause.auth_id).await?;
                    }

                    auth_repository.delete(user.auth_id).await?;

                    Ok(())
                })
            })
            .await
            .map_err(Error::from_transaction)
    }

    /// Deletes a cause together with its subtype and all dependent rows.
    pub async fn delete_cause(&self, cause_id: i32) -> Result<(), Error> {
        self.db
            .transaction::<_, (), Error>(move |txn| {
                Box::pin(async move {
                    let cause = CauseRepository::new(txn)
                        .get_by_id(cause_id)
                        .await?
                        .ok_or(Error::NotFound("cause"))?;

                    AuthRepository::new(txn).delete(cause.auth_id).await?;

                    Ok(())
                })
            })
            .await
            .map_err(Error::from_transaction)
    }

    /// Lists every user with its auth role for the admin dashboard
    pub async fn list_users(&self) -> Result<Vec<AdminUserDto>, Error> {
        let users = UserRepository::new(self.db).get_all_with_auth().await?;

        Ok(users
            .into_iter()
            .map(|(user, auth)| AdminUserDto {
                user_id: user.user_id,
                auth_id: user.auth_id,
                name: user.name,
                verified: user.verified,
                role: auth.map(|a| a.role).unwrap_or_else(|| "unknown".to_string()),
            })
            .collect())
    }

    /// Lists every cause with its subtype for the admin dashboard
    pub async fn list_causes(&self) -> Result<Vec<AdminCauseDto>, Error> {
        let causes = CauseRepository::new(self.db).get_all().await?;

        let ngo_ids: HashSet<i32> = NgoRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|n| n.cause_id)
            .collect();
        let event_ids: HashSet<i32> = EventRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|e| e.cause_id)
            .collect();

        Ok(causes
            .into_iter()
            .map(|cause| {
                let cause_type = if ngo_ids.contains(&cause.cause_id) {
                    CauseType::Ngo
                } else if event_ids.contains(&cause.cause_id) {
                    CauseType::Event
                } else {
                    CauseType::Unknown
                };

                AdminCauseDto {
                    cause_id: cause.cause_id,
                    name: cause.name,
                    verified: cause.verified,
                    cause_type,
                }
            })
            .collect())
    }
}
