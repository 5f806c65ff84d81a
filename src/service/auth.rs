use sea_orm::DatabaseConnection;

use crate::{
    data::AuthRepository,
    error::{auth::AuthError, Error},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and the admin verification gate.
    ///
    /// An unknown name and a wrong password both surface as
    /// [`AuthError::InvalidCredentials`] so callers cannot probe which names
    /// exist.
    pub async fn login(
        &self,
        name: &str,
        password: &str,
    ) -> Result<entity::auth_data::Model, Error> {
        let auth_repository = AuthRepository::new(self.db);

        let auth = auth_repository
            .get_by_name(name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(password, &auth.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !auth.verified {
            return Err(AuthError::NotVerified(auth.name).into());
        }

        Ok(auth)
    }
}
