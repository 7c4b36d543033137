use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use gamehub::server::{
    config::Config, error::AppError, router, service::identity::token::TokenIssuer, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::seed_super_admin(&db, &config).await?;

    let origin = config.app_url.parse::<HeaderValue>().map_err(|e| {
        AppError::InternalError(format!("Invalid APP_URL '{}': {}", config.app_url, e))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(db, TokenIssuer::from_config(&config)))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e)))?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
