use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use buntubuild_core::profiles::{NewUserProfile, UserProfile};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest {
    email: String,
    display_name: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SigninRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    access_token: String,
    user: UserProfile,
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<Json<SessionResponse>> {
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    let email = request.email.trim().to_lowercase();
    let is_admin = state
        .admin_email
        .as_deref()
        .is_some_and(|admin| admin == email);

    let password_hash = state.auth.hash_password(&request.password)?;
    let profile = state
        .profile_service
        .ensure_profile(NewUserProfile {
            id: None,
            email,
            display_name: request.display_name,
            password_hash,
            is_admin,
        })
        .await?;

    let access_token = state.auth.issue_token(&profile.user_id, profile.is_admin)?;
    Ok(Json(SessionResponse {
        access_token,
        user: profile,
    }))
}

async fn signin(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SigninRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let email = request.email.trim().to_lowercase();
    let credentials = state
        .profile_service
        .find_credentials_by_email(&email)?
        .ok_or(ApiError::InvalidCredentials)?;

    if !state
        .auth
        .verify_password(&request.password, &credentials.password_hash)
    {
        return Err(ApiError::InvalidCredentials);
    }
    if credentials.disabled {
        return Err(ApiError::AccountDisabled);
    }

    let profile = state.profile_service.get_profile(&credentials.user_id)?;
    let access_token = state
        .auth
        .issue_token(&credentials.user_id, credentials.is_admin)?;
    Ok(Json(SessionResponse {
        access_token,
        user: profile,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}
