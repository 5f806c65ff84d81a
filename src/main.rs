use servia::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    startup::ensure_admin(&db, &config).await.unwrap();
    let session = startup::build_session_layer(&config).unwrap();
    let cors = startup::build_cors_layer(&config).unwrap();

    tracing::info!("Starting server on {}", config.bind_addr);

    let router = router::routes()
        .with_state(AppState { db })
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();
    axum::serve(listener, router).await.unwrap();
}
