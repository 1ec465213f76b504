//! Maps core errors to HTTP status codes and structured JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use papertrade_core::portfolio::PortfolioError;
use papertrade_core::trading::TradeError;
use papertrade_core::users::UserError;
use papertrade_core::wallet::WalletError;
use papertrade_core::Error;
use papertrade_market_data::MarketDataError;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing error.
///
/// Business-rule rejections carry their structured data (amounts, owned
/// quantity) so the frontend can render precise messages.
pub enum ApiError {
    Core(Error),
    /// Missing/invalid bearer token.
    Unauthorized(&'static str),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

fn core_response(err: &Error) -> (StatusCode, serde_json::Value) {
    match err {
        Error::Trade(TradeError::InsufficientFunds {
            required,
            available,
        }) => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Insufficient balance to execute buy",
                "required": required,
                "availableBalance": available,
            }),
        ),
        Error::Trade(TradeError::InsufficientQuantity { owned_quantity }) => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Not enough quantity to sell",
                "ownedQuantity": owned_quantity,
            }),
        ),
        Error::Trade(TradeError::NoSuchPosition(symbol)) => (
            StatusCode::NOT_FOUND,
            json!({ "error": format!("No open position for {}", symbol) }),
        ),
        Error::Trade(TradeError::InvalidTrade(message)) => {
            (StatusCode::BAD_REQUEST, json!({ "error": message }))
        }
        Error::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
        Error::Wallet(WalletError::InsufficientCash { available }) => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Insufficient cash balance",
                "available": available,
            }),
        ),
        Error::Wallet(WalletError::InvalidAmount(message)) => {
            (StatusCode::BAD_REQUEST, json!({ "error": message }))
        }
        Error::Wallet(WalletError::WalletInactive) => (
            StatusCode::FORBIDDEN,
            json!({ "error": "Wallet is not active" }),
        ),
        Error::User(UserError::EmailTaken(email)) => (
            StatusCode::CONFLICT,
            json!({ "error": format!("A user with email {} already exists", email) }),
        ),
        Error::User(UserError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            json!({ "error": "Invalid email or password" }),
        ),
        Error::User(UserError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, json!({ "error": "User not found" }))
        }
        Error::User(UserError::InvalidData(message)) => {
            (StatusCode::BAD_REQUEST, json!({ "error": message }))
        }
        Error::Portfolio(PortfolioError::PositionNotFound(symbol)) => (
            StatusCode::NOT_FOUND,
            json!({ "error": format!("No holding found for symbol {}", symbol) }),
        ),
        Error::MarketData(MarketDataError::NotFound(message)) => {
            (StatusCode::NOT_FOUND, json!({ "error": message }))
        }
        Error::MarketData(MarketDataError::RateLimitExceeded) => (
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "error": "Market data rate limit exceeded" }),
        ),
        Error::MarketData(e) => {
            tracing::warn!("market data failure: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Market data provider unavailable" }),
            )
        }
        Error::Database(e) => {
            tracing::error!("storage failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            )
        }
        other => {
            tracing::error!("unhandled error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Core(err) => core_response(err),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}
