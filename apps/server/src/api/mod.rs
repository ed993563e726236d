//! HTTP route registry.

pub mod admin;
pub mod advisor;
pub mod auth;
pub mod escrow;
pub mod goals;
pub mod health;
pub mod profiles;
pub mod roles;
pub mod transactions;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(profiles::router())
        .merge(goals::router())
        .merge(transactions::router())
        .merge(escrow::router())
        .merge(advisor::router())
        .merge(admin::router())
        .merge(roles::router());

    Router::new()
        .nest("/api/v1", api)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}
