use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use buntubuild_core::planning::PlanProjection;
use buntubuild_core::profiles::{PlanUpdate, UserProfile};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_profile(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.profile_service.get_profile(&user.user_id)?;
    Ok(Json(profile))
}

async fn update_plan(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<PlanUpdate>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state
        .profile_service
        .update_plan(&user.user_id, update)
        .await?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyRequest {
    currency: String,
}

async fn set_currency(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(request): Json<CurrencyRequest>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state
        .profile_service
        .set_currency(&user.user_id, &request.currency)
        .await?;
    Ok(Json(profile))
}

async fn get_projection(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PlanProjection>> {
    let projection = state
        .profile_service
        .project_plan(&user.user_id, Utc::now().date_naive())?;
    Ok(Json(projection))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile/plan", put(update_plan))
        .route("/profile/currency", put(set_currency))
        .route("/profile/projection", get(get_projection))
}
