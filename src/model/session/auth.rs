use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{error::Error, model::role::Role};

pub const SESSION_AUTH_KEY: &str = "servia:auth";

/// The identity stored in the session after a successful login.
#[derive(Clone, Copy, Deserialize, Serialize, Debug)]
pub struct SessionAuth {
    pub auth_id: i32,
    pub role: Role,
}

impl SessionAuth {
    /// Insert the logged-in identity into the session
    pub async fn insert(session: &Session, auth_id: i32, role: Role) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_KEY, SessionAuth { auth_id, role })
            .await?;

        Ok(())
    }

    /// Get the logged-in identity from the session
    pub async fn get(session: &Session) -> Result<Option<SessionAuth>, Error> {
        Ok(session.get::<SessionAuth>(SESSION_AUTH_KEY).await?)
    }
}
