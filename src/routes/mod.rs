//! Router builders.

pub mod common;
pub mod mobile;

pub use common::common_routes;
pub use mobile::mobile_routes;

use crate::config::ServiceConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes plus the mobiles resource, with tracing and a body size cap.
pub fn app(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(mobile_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.body_limit_bytes)),
        )
}
