//! Admin console routes. Every handler takes [`AdminUser`], which re-checks
//! the user row before trusting the token's admin claim.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use buntubuild_core::escrow::{Milestone, PendingRelease};
use buntubuild_core::profiles::UserSummary;
use buntubuild_core::transactions::Transaction;

use crate::auth::AdminUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_users(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = state.profile_service.list_users()?;
    Ok(Json(users))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisabledRequest {
    disabled: bool,
}

async fn set_user_disabled(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<DisabledRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    state
        .profile_service
        .set_disabled(&id, request.disabled)
        .await?;
    Ok(Json(serde_json::json!({ "disabled": request.disabled })))
}

async fn list_all_transactions(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.get_all_transactions()?;
    Ok(Json(transactions))
}

async fn list_pending_releases(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PendingRelease>>> {
    let pending = state.escrow_service.list_pending_releases()?;
    Ok(Json(pending))
}

async fn approve_release(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Milestone>> {
    let milestone = state.escrow_service.approve_release(&id).await?;
    Ok(Json(milestone))
}

async fn deny_release(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Milestone>> {
    let milestone = state.escrow_service.deny_release(&id).await?;
    Ok(Json(milestone))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/users/{id}/disabled", put(set_user_disabled))
        .route("/admin/transactions", get(list_all_transactions))
        .route("/admin/escrow/pending", get(list_pending_releases))
        .route("/admin/escrow/{id}/approve", post(approve_release))
        .route("/admin/escrow/{id}/deny", post(deny_release))
}
