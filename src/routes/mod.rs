//! Routers: maintainer endpoints and system (health/build-info) endpoints.

mod common;
mod maintainers;

pub use common::system_routes;
pub use maintainers::maintainer_routes;

use crate::response::{self, EnvelopeResponse, DEFAULT_NOT_FOUND_MESSAGE};
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Prefix under which the maintainer routes are served.
pub const API_PREFIX: &str = "/api/v1";

async fn unknown_route() -> EnvelopeResponse {
    response::not_found(DEFAULT_NOT_FOUND_MESSAGE)
}

/// Full application: system routes at the root, maintainers under [`API_PREFIX`], request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(system_routes(state.clone()))
        .nest(API_PREFIX, maintainer_routes(state))
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
}
