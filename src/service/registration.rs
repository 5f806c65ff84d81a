use chrono::{NaiveDate, NaiveTime};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        cause::NewCause, AuthRepository, CauseRepository, EventRepository, NgoRepository,
        UserRepository,
    },
    error::{registration::RegistrationError, Error},
    model::role::Role,
    service::is_unique_violation,
};

/// Bounded retries for the parity id race (see [`CauseRepository::next_id`]).
const MAX_ID_ATTEMPTS: u32 = 3;

/// Input for registering a donor account.
pub struct RegisterUserData {
    pub name: String,
    pub password: String,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// Input for registering an NGO or event cause.
#[derive(Clone)]
pub struct RegisterCauseData {
    pub name: String,
    pub password: String,
    pub owner_user_id: i32,
    pub email: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub if_online: bool,
    pub year_est: Option<i32>,
    pub age: Option<i32>,
    pub capacity: Option<i32>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub ngo_id: Option<i32>,
}

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a donor account.
    ///
    /// Creates the auth record (unverified) and the linked user profile in
    /// one transaction. Returns the generated auth and user ids.
    pub async fn register_user(&self, data: RegisterUserData) -> Result<(i32, i32), Error> {
        let auth_repository = AuthRepository::new(self.db);

        if auth_repository.get_by_name(&data.name).await?.is_some() {
            return Err(RegistrationError::DuplicateName(data.name).into());
        }

        let password_hash = bcrypt::hash(&data.password, bcrypt::DEFAULT_COST)?;
        let name = data.name.clone();

        let result = self
            .db
            .transaction::<_, (i32, i32), Error>(move |txn| {
                Box::pin(async move {
                    let auth = AuthRepository::new(txn)
                        .create(&data.name, Role::User.as_str(), &password_hash, false)
                        .await?;

                    let user = UserRepository::new(txn)
                        .create(auth.id, &data.name, data.email, data.age)
                        .await?;

                    Ok((auth.id, user.user_id))
                })
            })
            .await
            .map_err(Error::from_transaction);

        match result {
            // A registration that raced us past the pre-check still loses to
            // the name uniqueness constraint.
            Err(Error::DbErr(err)) if is_unique_violation(&err) => {
                Err(RegistrationError::DuplicateName(name).into())
            }
            other => other,
        }
    }

    /// Registers an NGO or event cause owned by a verified user.
    ///
    /// The cause id is computed inside the transaction from the current
    /// maximum of the matching parity; the primary key constraint catches two
    /// registrations observing the same maximum and the losing transaction is
    /// retried with a fresh id.
    pub async fn register_cause(
        &self,
        role: Role,
        data: RegisterCauseData,
    ) -> Result<(i32, i32), Error> {
        let is_ngo = match role {
            Role::Ngo => true,
            Role::Event => false,
            other => {
                return Err(Error::InternalError(format!(
                    "register_cause called with role {:?}",
                    other
                )))
            }
        };

        let user_repository = UserRepository::new(self.db);
        let owner = user_repository
            .get_by_id(data.owner_user_id)
            .await?
            .ok_or(RegistrationError::OwnerNotFound(data.owner_user_id))?;

        if !owner.verified {
            return Err(RegistrationError::OwnerNotVerified(owner.user_id).into());
        }

        let auth_repository = AuthRepository::new(self.db);
        if auth_repository.get_by_name(&data.name).await?.is_some() {
            return Err(RegistrationError::DuplicateName(data.name).into());
        }

        let password_hash = bcrypt::hash(&data.password, bcrypt::DEFAULT_COST)?;
        let name = data.name.clone();

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let data = data.clone();
            let password_hash = password_hash.clone();

            let result = self
                .db
                .transaction::<_, (i32, i32), Error>(move |txn| {
                    Box::pin(async move {
                        let auth = AuthRepository::new(txn)
                            .create(&data.name, role.as_str(), &password_hash, false)
                            .await?;

                        let cause_repository = CauseRepository::new(txn);
                        let cause_id = cause_repository.next_id(is_ngo).await?;

                        let cause = cause_repository
                            .create(NewCause {
                                cause_id,
                                name: data.name,
                                description: data.description,
                                logo: data.logo,
                                email: data.email,
                                if_online: data.if_online,
                                user_id: data.owner_user_id,
                                auth_id: auth.id,
                            })
                            .await?;

                        if is_ngo {
                            NgoRepository::new(txn)
                                .create(cause.cause_id, data.year_est, data.age)
                                .await?;
                        } else {
                            EventRepository::new(txn)
                                .create(
                                    cause.cause_id,
                                    data.capacity,
                                    data.date,
                                    data.time,
                                    data.ngo_id,
                                )
                                .await?;
                        }

                        Ok((auth.id, cause.cause_id))
                    })
                })
                .await
                .map_err(Error::from_transaction);

            match result {
                Ok(ids) => return Ok(ids),
                Err(Error::DbErr(err)) if is_unique_violation(&err) => {
                    // The rolled-back transaction owned no rows, so a
                    // surviving auth row under this name means a concurrent
                    // registration took the name rather than the cause id.
                    if auth_repository.get_by_name(&name).await?.is_some() {
                        return Err(RegistrationError::DuplicateName(name).into());
                    }

                    tracing::debug!(attempt, "cause id conflict, retrying registration");
                }
                Err(err) => return Err(err),
            }
        }

        Err(RegistrationError::IdAllocationFailed(MAX_ID_ATTEMPTS).into())
    }
}
