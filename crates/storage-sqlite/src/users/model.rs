use diesel::prelude::*;

use papertrade_core::users::User;

use crate::errors::StorageError;
use crate::utils::{format_datetime, parse_datetime};

/// Database model for users.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserDB {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            is_active: user.is_active,
            last_login_at: user.last_login_at.as_ref().map(format_datetime),
            created_at: format_datetime(&user.created_at),
            updated_at: format_datetime(&user.updated_at),
        }
    }
}

impl TryFrom<UserDB> for User {
    type Error = StorageError;

    fn try_from(db: UserDB) -> Result<Self, Self::Error> {
        Ok(User {
            last_login_at: db
                .last_login_at
                .as_deref()
                .map(|ts| parse_datetime(ts, "users.last_login_at"))
                .transpose()?,
            created_at: parse_datetime(&db.created_at, "users.created_at")?,
            updated_at: parse_datetime(&db.updated_at, "users.updated_at")?,
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            password_hash: db.password_hash,
            is_active: db.is_active,
        })
    }
}
