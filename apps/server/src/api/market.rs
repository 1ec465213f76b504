use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use papertrade_core::quotes::{CompanyProfile, NewsArticle, Quote, SymbolSearchResult};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<SymbolSearchResult>>> {
    let results = state.market_service.search_symbols(&params.q).await?;
    Ok(Json(results))
}

async fn quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Quote>> {
    let quote = state.market_service.get_quote_detail(&symbol).await?;
    Ok(Json(quote))
}

async fn stock_detail(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<CompanyProfile>> {
    let profile = state.market_service.get_company_profile(&symbol).await?;
    Ok(Json(profile))
}

async fn stock_news(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Vec<NewsArticle>>> {
    let news = state.market_service.get_company_news(&symbol).await?;
    Ok(Json(news))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/market/search", get(search))
        .route("/market/quote/{symbol}", get(quote))
        .route("/market/stocks/{symbol}", get(stock_detail))
        .route("/market/stocks/{symbol}/news", get(stock_news))
}
