use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub session_secret: String,
    pub allowed_origin: String,
    pub bind_addr: String,
    pub admin_name: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            session_secret: require("SESSION_SECRET")?,
            allowed_origin: require("ALLOWED_ORIGIN")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            admin_name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: require("ADMIN_PASSWORD")?,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
