mod config;
mod documents;
mod errors;
mod matching;
mod routes;
mod skills;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::catalog::SkillList;
use crate::skills::matcher::build_matcher;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is read once and owned by the matcher for the process lifetime
    let skills = SkillList::load(&config.skills_path)?;
    if skills.is_empty() {
        warn!("Skill catalog is empty; every request will match nothing");
    }
    let matcher = build_matcher(config.skill_matcher, skills)?;
    info!(
        "Skill matcher: {} ({} skills)",
        matcher.kind(),
        matcher.skills().len()
    );

    let state = AppState {
        config: config.clone(),
        matcher,
    };

    // Any origin, method and header may call the API.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
