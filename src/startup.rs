use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{service::SignedCookie, MemoryStore, SessionManagerLayer};

use crate::{
    config::Config,
    data::AuthRepository,
    error::{config::ConfigError, Error},
    model::role::Role,
    service::is_unique_violation,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management with signed cookies
pub fn build_session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, Error> {
    use time::Duration;
    use tower_sessions::{
        cookie::{Key, SameSite},
        Expiry,
    };

    // cookie::Key::from panics below 64 bytes of material.
    if config.session_secret.len() < 64 {
        return Err(ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: "must be at least 64 characters".to_string(),
        }
        .into());
    }

    let key = Key::from(config.session_secret.as_bytes());
    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}

/// Restrict cross-origin requests to the configured frontend host
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            var: "ALLOWED_ORIGIN".to_string(),
            reason: "not a valid header value".to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Create the admin account if it does not exist yet.
///
/// Runs once at startup. The name uniqueness constraint makes the step
/// idempotent even when several instances boot against the same database at
/// the same time.
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let auth_repository = AuthRepository::new(db);

    if auth_repository
        .get_by_name(&config.admin_name)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let password_hash = bcrypt::hash(&config.admin_password, bcrypt::DEFAULT_COST)?;

    match auth_repository
        .create(&config.admin_name, Role::Admin.as_str(), &password_hash, true)
        .await
    {
        Ok(admin) => {
            tracing::info!("Created admin account {:?} with ID {}", admin.name, admin.id);

            Ok(())
        }
        // Another instance won the bootstrap race.
        Err(err) if is_unique_violation(&err) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
