use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};

use papertrade_core::trading::{BuyOutcome, SellOutcome, TradeRequest};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn buy(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<TradeRequest>,
) -> ApiResult<Json<BuyOutcome>> {
    let outcome = state
        .trading_service
        .execute_buy(&user.user_id, request)
        .await?;
    Ok(Json(outcome))
}

async fn sell(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<TradeRequest>,
) -> ApiResult<Json<SellOutcome>> {
    let outcome = state
        .trading_service
        .execute_sell(&user.user_id, request)
        .await?;
    Ok(Json(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trades/buy", post(buy))
        .route("/trades/sell", post(sell))
}
