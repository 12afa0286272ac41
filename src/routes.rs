//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page, empty state
//! - `POST /shorten`  - Create a mapping from the form field `url`; any
//!   other method on this path is redirected back to `/`
//! - `GET  /{code}`   - Short link redirect (302), 404 when unknown
//!
//! # Middleware
//!
//! - **Tracing** - request/response logging with latency

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::handlers::{
    index_handler, redirect_handler, shorten_handler, shorten_wrong_method_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/shorten",
            post(shorten_handler).fallback(shorten_wrong_method_handler),
        )
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}
