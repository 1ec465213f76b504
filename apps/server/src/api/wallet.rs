use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use papertrade_core::wallet::{CashTransaction, WalletOverview};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct CashMovementBody {
    amount: Decimal,
}

async fn get_wallet(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<WalletOverview>> {
    let overview = state.wallet_service.get_overview(&user.user_id)?;
    Ok(Json(overview))
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<CashTransaction>>> {
    let transactions = state.wallet_service.list_cash_transactions(&user.user_id)?;
    Ok(Json(transactions))
}

async fn deposit(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CashMovementBody>,
) -> ApiResult<Json<CashTransaction>> {
    let transaction = state.wallet_service.deposit(&user.user_id, body.amount).await?;
    Ok(Json(transaction))
}

async fn withdraw(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CashMovementBody>,
) -> ApiResult<Json<CashTransaction>> {
    let transaction = state
        .wallet_service
        .withdraw(&user.user_id, body.amount)
        .await?;
    Ok(Json(transaction))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wallet", get(get_wallet))
        .route("/wallet/transactions", get(list_transactions))
        .route("/wallet/deposit", post(deposit))
        .route("/wallet/withdraw", post(withdraw))
}
