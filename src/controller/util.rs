//! Shared helpers for controllers.

use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{role::Role, session::auth::SessionAuth},
};

/// Gets the logged-in identity or rejects the request.
pub async fn current_auth(session: &Session) -> Result<SessionAuth, Error> {
    SessionAuth::get(session)
        .await?
        .ok_or_else(|| AuthError::NotLoggedIn.into())
}

/// Gets the logged-in identity and checks the admin role claim.
pub async fn require_admin(session: &Session) -> Result<SessionAuth, Error> {
    let auth = current_auth(session).await?;

    if auth.role != Role::Admin {
        return Err(AuthError::AdminOnly(auth.role.to_string()).into());
    }

    Ok(auth)
}
