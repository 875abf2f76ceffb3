use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::AppConfig;
use mergington_activities::database::ActivityDirectory;
use mergington_activities::web;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Seed the in-memory directory; it lives until the process exits
    let config = AppConfig::from_env();
    let directory = ActivityDirectory::seeded();
    info!(
        activities = directory.list_activities().await.len(),
        "activity directory seeded"
    );

    let app = web::router(directory, &config.static_dir);

    // 3. Bind, falling back to the next port once
    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        static_dir = %config.static_dir.display(),
        "serving on http://{}{}", bound_addr, web::INDEX_PATH
    );

    axum::serve(listener, app).await?;
    Ok(())
}
