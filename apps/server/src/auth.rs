//! Password hashing and JWT issuing/verification.
//!
//! Standard bearer-token pattern: short-lived access tokens (3 h) plus
//! longer-lived refresh tokens (7 d). Refresh tokens are stateless JWTs
//! distinguished by a `type` claim; logout is client-side discard.

use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use papertrade_core::users::UserError;

use crate::error::ApiError;
use crate::main_lib::AppState;

const ACCESS_TTL_SECS: i64 = 3 * 60 * 60;
const REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;

const ACCESS_TOKEN_TYPE: &str = "access";
const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id.
    sub: String,
    #[serde(rename = "type")]
    token_type: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthManager {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, papertrade_core::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| papertrade_core::Error::Unexpected(format!("password hashing: {}", e)))
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn issue_tokens(&self, user_id: &str) -> Result<TokenPair, papertrade_core::Error> {
        Ok(TokenPair {
            access_token: self.issue(user_id, ACCESS_TOKEN_TYPE, ACCESS_TTL_SECS)?,
            refresh_token: self.issue(user_id, REFRESH_TOKEN_TYPE, REFRESH_TTL_SECS)?,
        })
    }

    fn issue(
        &self,
        user_id: &str,
        token_type: &str,
        ttl_secs: i64,
    ) -> Result<String, papertrade_core::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            token_type: token_type.to_string(),
            iat: now,
            exp: now + ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| papertrade_core::Error::Unexpected(format!("token signing: {}", e)))
    }

    /// Verifies an access token and returns the user id.
    pub fn verify_access(&self, token: &str) -> Result<String, ApiError> {
        self.verify(token, ACCESS_TOKEN_TYPE)
    }

    /// Verifies a refresh token and returns the user id.
    pub fn verify_refresh(&self, token: &str) -> Result<String, ApiError> {
        self.verify(token, REFRESH_TOKEN_TYPE)
    }

    fn verify(&self, token: &str, expected_type: &str) -> Result<String, ApiError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token"))?;
        if data.claims.token_type != expected_type {
            return Err(ApiError::Unauthorized("Wrong token type"));
        }
        Ok(data.claims.sub)
    }
}

/// The authenticated caller, inserted by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Bearer-token middleware for the protected routes.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized("Missing bearer token"))?;

    let user_id = state.auth.verify_access(token)?;

    // The account must still exist and be active.
    state
        .user_service
        .get_user(&user_id)
        .map_err(|_| ApiError::Core(UserError::InvalidCredentials.into()))?;

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}
