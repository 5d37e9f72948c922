//! Server: loads config from env, ensures the `mobiles` table exists, serves the mobiles API.

use mobile_store::{app, AppState, MobileStore, ServiceConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mobile_store=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let store = MobileStore::new(&config.database_path);
    store.init_schema().await?;

    let router = app(AppState::new(store), &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
