// Portfolio Site - Web Server

use anyhow::{Context, Result};
use portfolio_site::content::Severity;
use portfolio_site::web::{create_router, AppState};
use portfolio_site::{Portfolio, ServerConfig, VERSION};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info,portfolio_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let content = Portfolio::default();
    for issue in content.validate() {
        match issue.severity {
            Severity::Critical => warn!(field = %issue.field, "content problem: {}", issue.issue),
            Severity::Warning => info!(field = %issue.field, "content note: {}", issue.issue),
        }
    }

    let app = create_router(AppState::new(content));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    info!(version = VERSION, "portfolio server listening on http://{}", config.addr);

    axum::serve(listener, app)
        .await
        .context("Server exited with an error")?;

    Ok(())
}
