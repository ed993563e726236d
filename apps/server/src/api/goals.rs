use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};

use buntubuild_core::goals::{Goal, GoalUpdate, NewGoal};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_goals(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals(&user.user_id)?;
    Ok(Json(goals))
}

async fn create_goal(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.add_goal(&user.user_id, goal).await?;
    Ok(Json(g))
}

async fn update_goal(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let g = state
        .goal_service
        .update_goal(&user.user_id, update)
        .await?;
    Ok(Json(g))
}

async fn delete_goal(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.goal_service.remove_goal(&user.user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_template(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(template): Json<Vec<NewGoal>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state
        .goal_service
        .apply_template(&user.user_id, template)
        .await?;
    Ok(Json(goals))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal).put(update_goal))
        .route("/goals/template", put(apply_template))
        .route("/goals/{id}", delete(delete_goal))
}
