pub mod auth;
pub mod market;
pub mod portfolio;
pub mod settings;
pub mod trading;
pub mod wallet;

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(trading::router())
        .merge(portfolio::router())
        .merge(wallet::router())
        .merge(settings::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ));

    let public = Router::new().merge(auth::router()).merge(market::router());

    Router::new()
        .nest("/api", public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
