//! Banter - self-hosted chat widget server
//!
//! A small HTTP adapter in front of a reply engine: the root path serves an
//! embeddable chat page, and `/chat` forwards each message to the engine and
//! returns its answer as JSON.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod reply;
mod routes;

use config::Config;
use reply::{Replier, RuleEngine};

/// Upper bound on a single request, including the reply engine call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub replier: Arc<dyn Replier>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let default_filter = if config.debug {
        "banter=debug,tower_http=debug"
    } else {
        "banter=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        config,
        replier: Arc::new(RuleEngine::new()),
    };
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state);

    tracing::info!("💬 Banter running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
