use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use buntubuild_core::escrow::{Milestone, ReleaseDocument};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_milestones(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Milestone>>> {
    let milestones = state.escrow_service.get_milestones(&user.user_id)?;
    Ok(Json(milestones))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseRequest {
    #[serde(default)]
    documents: Vec<ReleaseDocument>,
}

async fn request_release(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReleaseRequest>,
) -> ApiResult<Json<Milestone>> {
    let milestone = state
        .escrow_service
        .request_release(&user.user_id, &id, request.documents)
        .await?;
    Ok(Json(milestone))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/escrow/milestones", get(get_milestones))
        .route("/escrow/milestones/{id}/request", post(request_release))
}
