use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use papertrade_core::users::{NewUser, UserError};

use crate::auth::TokenPair;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Matches the original frontend's password policy.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignupBody {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody {
    refresh_token: String,
}

fn session_body(user: &papertrade_core::users::User, tokens: TokenPair) -> Value {
    json!({
        "user": user,
        "accessToken": tokens.access_token,
        "refreshToken": tokens.refresh_token,
    })
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupBody>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    if body.password.len() < MIN_PASSWORD_LEN {
        return Err(papertrade_core::Error::from(UserError::InvalidData(
            "Password must be at least 6 characters".to_string(),
        ))
        .into());
    }

    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state.user_service.register(NewUser {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password_hash,
    })?;

    let tokens = state.auth.issue_tokens(&user.id)?;
    Ok((StatusCode::CREATED, Json(session_body(&user, tokens))))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> ApiResult<Json<Value>> {
    let user = state
        .user_service
        .find_by_email(&body.email)?
        .filter(|user| user.is_active)
        .filter(|user| state.auth.verify_password(&body.password, &user.password_hash))
        .ok_or(papertrade_core::Error::User(UserError::InvalidCredentials))?;

    state.user_service.touch_last_login(&user.id)?;
    let tokens = state.auth.issue_tokens(&user.id)?;
    Ok(Json(session_body(&user, tokens)))
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshBody>,
) -> ApiResult<Json<Value>> {
    let user_id = state.auth.verify_refresh(&body.refresh_token)?;
    // The account must still exist; deleted users keep their old tokens.
    let user = state.user_service.get_user(&user_id)?;

    let tokens = state.auth.issue_tokens(&user.id)?;
    Ok(Json(json!({
        "accessToken": tokens.access_token,
        "refreshToken": tokens.refresh_token,
    })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}
