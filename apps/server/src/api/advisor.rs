use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use buntubuild_ai::{ContributionSuggestion, ContributionSuggestionRequest};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn suggest_contribution(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContributionSuggestionRequest>,
) -> ApiResult<Json<ContributionSuggestion>> {
    let suggestion = state.advisor.suggest_contribution(request).await?;
    Ok(Json(suggestion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/advisor/contribution", post(suggest_contribution))
}
