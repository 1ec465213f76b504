use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::UserError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").expect("email regex must compile");
}

/// A registered account.
///
/// `password_hash` is an opaque argon2 PHC string produced and verified by the
/// HTTP layer; core never sees plaintext passwords.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Lowercased, unique.
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Input model for registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Already hashed by the caller.
    #[serde(skip)]
    pub password_hash: String,
}

impl NewUser {
    /// Validates the registration data.
    pub fn validate(&self) -> Result<(), UserError> {
        if self.first_name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "First name cannot be empty".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "Last name cannot be empty".to_string(),
            ));
        }
        let email = self.email.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(UserError::InvalidData(format!("Invalid email: {}", email)));
        }
        if self.password_hash.is_empty() {
            return Err(UserError::InvalidData(
                "Password hash cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the persisted user with normalized fields.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password_hash: self.password_hash,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input model for profile updates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
