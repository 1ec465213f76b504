use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};

use papertrade_core::users::{User, UserProfileUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<User>> {
    let profile = state.user_service.get_user(&user.user_id)?;
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(update): Json<UserProfileUpdate>,
) -> ApiResult<Json<User>> {
    let updated = state.user_service.update_profile(&user.user_id, update)?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings/profile", get(get_profile).put(update_profile))
}
