use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coursify::state::connect_db;
use coursify::{AppState, Config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "coursify=debug,tower_http=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new_from_env()?;

    let pool = connect_db(&config).await?;

    if config.debug_data {
        info!("serving courses from the in-memory mock store");
    } else {
        info!("serving courses from {}", config.database_url);
    }

    let addr = config.bind_addr;
    let state = AppState::new(config, pool);
    let app = router(state);

    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
