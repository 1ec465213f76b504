use thiserror::Error;

/// Errors for user account operations.
#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    #[error("A user with email {0} already exists")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid user data: {0}")]
    InvalidData(String),
}
