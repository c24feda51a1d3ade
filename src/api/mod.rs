//! HTTP API.
//!
//! Routes:
//!
//! - `GET /api/idioms` - random idioms (`count`, `difficulty`)
//! - `GET /api/idioms/refresh` - rewritten idiom variations (`count`)
//! - `GET /api/words` - dictionary words with static fallback (`count`, `difficulty`, `external`)
//! - `GET /api/words/refresh` - same as `/api/words`, with a message
//! - `GET /api/stats` - cache and pool figures
//! - `POST /api/cache/clear` - empties the word cache
//! - `GET /api/health` - liveness
//!
//! Every response carries permissive CORS and no-cache headers. A handler
//! panic is answered with the regular 500 envelope.

mod error;
mod handlers;

pub use error::{panic_response, ApiError};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::orchestrator::Deck;
use crate::types::config::Config;
use crate::LexiResult;

/// Shared handler state.
pub type SharedDeck = Arc<Deck>;

/// Builds the router with all routes and response headers.
pub fn router(deck: SharedDeck) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, CACHE_CONTROL, PRAGMA, EXPIRES]);

    Router::new()
        .route("/api/idioms", get(handlers::idioms))
        .route("/api/idioms/refresh", get(handlers::refresh_idioms))
        .route("/api/words", get(handlers::words))
        .route("/api/words/refresh", get(handlers::refresh_words))
        .route("/api/stats", get(handlers::stats))
        .route("/api/cache/clear", post(handlers::clear_cache))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(deck)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &Config) -> LexiResult<()> {
    let deck = Arc::new(Deck::from_config(config)?);
    let listener = TcpListener::bind(config.server.bind_address()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(
        address = %addr,
        dictionary = config.dictionary.enabled,
        "lexideck API listening on http://{}",
        addr
    );

    run(listener, deck).await
}

/// Serves `deck` on an already bound listener.
pub async fn run(listener: TcpListener, deck: SharedDeck) -> LexiResult<()> {
    axum::serve(listener, router(deck))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Binds an ephemeral port on localhost and serves in the background.
pub async fn spawn(deck: SharedDeck) -> LexiResult<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router(deck)).await {
            tracing::error!(error = %e, "Background server failed");
        }
    });

    Ok(addr)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
