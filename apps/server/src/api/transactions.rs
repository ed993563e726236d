use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use buntubuild_core::transactions::{NewTransaction, Transaction};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_transactions(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.get_transactions(&user.user_id)?;
    Ok(Json(transactions))
}

async fn record_transaction(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(transaction): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    let recorded = state
        .transaction_service
        .record(&user.user_id, transaction)
        .await?;
    Ok(Json(recorded))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/transactions",
        get(get_transactions).post(record_transaction),
    )
}
