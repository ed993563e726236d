use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use buntubuild_core::roles::{NewRole, Role, RoleUpdate};

use crate::auth::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn list_roles(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Role>>> {
    let roles = state.role_service.get_roles()?;
    Ok(Json(roles))
}

async fn create_role(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
    Json(new_role): Json<NewRole>,
) -> ApiResult<Json<Role>> {
    let role = state.role_service.create_role(new_role).await?;
    Ok(Json(role))
}

async fn update_role(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<RoleUpdate>,
) -> ApiResult<Json<Role>> {
    if !update.id.is_empty() && update.id != id {
        return Err(ApiError::BadRequest(
            "Role id in path and body disagree".to_string(),
        ));
    }
    update.id = id;
    let role = state.role_service.update_role(update).await?;
    Ok(Json(role))
}

async fn delete_role(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.role_service.remove_role(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/{id}", put(update_role).delete(delete_role))
}
