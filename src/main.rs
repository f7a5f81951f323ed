mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!(
        "Comment fan-out widths: parent {}, reply {}",
        config.fan_out.parent,
        config.fan_out.reply
    );

    let app = router::router()
        .with_state(AppState::new(db, config.fan_out))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
