//! Crack NCERT · Quiz Backend
//!
//! - Axum HTTP JSON API (quiz generation, tutor chat, chapters, auth codes)
//! - Gemini integration with model-fallback (via environment variables)
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   GEMINI_API_KEY      : enables quiz/chat generation if present
//!   GEMINI_BASE_URL     : default "https://generativelanguage.googleapis.com"
//!   FIREBASE_API_KEY    : enables identity admin operations if present
//!   FIREBASE_PROJECT_ID : enables the Firestore code store if present
//!   APP_ENV             : "development" echoes verification codes in responses
//!   AGENT_CONFIG_PATH   : path to TOML config (prompt overrides)
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crackncert_backend::routes::build_router;
use crackncert_backend::state::AppState;
use crackncert_backend::telemetry;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (provider clients, code store, prompts).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "ncert_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
