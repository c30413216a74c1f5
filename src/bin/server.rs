//! wisdom-site HTTP server binary.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `WISDOM_PREFS_DB` — Preference database path, or `:memory:`
//! - `WISDOM_CHAT_LATENCY_MS` — Chat reply delay (default: 1000)
//! - `WISDOM_SUBMIT_LATENCY_MS` — Contact submission delay (default: 1000)
//! - `WISDOM_SUBMIT_FAIL` — When set, every submission fails with this reason
//! - `RUST_LOG` — Tracing filter (default: "info,wisdom_site=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use anyhow::Context;
use wisdom_site::config::SiteConfig;
use wisdom_site::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wisdom_site=debug".into()),
        )
        .init();

    let config = SiteConfig::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(config.clone())
        .with_context(|| format!("Failed to open preference store '{}'", config.prefs_db))?;
    let shutdown = state.shutdown.clone();
    let app = app_router(state);

    tracing::info!("wisdom-site server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                — liveness probe");
    tracing::info!("  POST /form/field            — single field validation");
    tracing::info!("  POST /form/validate         — whole form validation");
    tracing::info!("  POST /form/phone-mask       — phone mask");
    tracing::info!("  POST /contact               — contact submission");
    tracing::info!("  POST /chat                  — Wisdom AI chat");
    tracing::info!("  GET  /chat/transcript[.html]");
    tracing::info!("  GET  /preferences, POST /preferences/{{theme,accessibility}}");
    if let Some(reason) = &config.submit_failure {
        tracing::warn!("Submissions are configured to fail: {}", reason);
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
            shutdown.cancel();
        })
        .await
        .context("Server failed")?;

    Ok(())
}
