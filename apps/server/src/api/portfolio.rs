use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Extension, Json, Router};

use papertrade_core::portfolio::performance::PortfolioSnapshot;
use papertrade_core::portfolio::{PortfolioSummary, PositionValuation};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.portfolio_service.get_portfolio(&user.user_id).await?;
    Ok(Json(summary))
}

async fn get_position(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<PositionValuation>> {
    let position = state
        .portfolio_service
        .get_position(&user.user_id, &symbol)
        .await?;
    Ok(Json(position))
}

async fn get_performance(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<PortfolioSnapshot>>> {
    let history = state
        .performance_service
        .get_performance_history(&user.user_id)?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/positions/{symbol}", get(get_position))
        .route("/portfolio/performance", get(get_performance))
}
