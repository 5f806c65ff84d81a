use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Role tag stored on every `auth_data` row.
///
/// The role decides which profile table the identity links to: `User` links to
/// a user row, `Ngo` and `Event` link to a cause row, `Admin` has no profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ngo,
    Event,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ngo => "ngo",
            Role::Event => "event",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "ngo" => Ok(Role::Ngo),
            "event" => Ok(Role::Event),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}
