use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::main_lib::AppState;

async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// Unversioned: probes keep hitting the same path across API revisions.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(ping))
}
