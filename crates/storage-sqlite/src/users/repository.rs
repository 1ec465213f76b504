use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use papertrade_core::users::{User, UserRepositoryTrait};
use papertrade_core::Result;

use super::model::UserDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::users;
use crate::utils::format_datetime;

/// Repository for user accounts.
pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl UserRepositoryTrait for UserRepository {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user_db = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        user_db
            .map(|db| User::try_from(db).map_err(Into::into))
            .transpose()
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user_db = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        user_db
            .map(|db| User::try_from(db).map_err(Into::into))
            .transpose()
    }

    fn create_user(&self, user: User) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(users::table)
            .values(UserDB::from(&user))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(user)
    }

    fn update_user(&self, user: User) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        diesel::update(users::table.find(&user.id))
            .set(UserDB::from(&user))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(user)
    }

    fn touch_last_login(&self, user_id: &str, at: DateTime<Utc>) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        diesel::update(users::table.find(user_id))
            .set(users::last_login_at.eq(Some(format_datetime(&at))))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(())
    }

    fn list_user_ids(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;

        users::table
            .filter(users::is_active.eq(true))
            .select(users::id)
            .load::<String>(&mut conn)
            .map_err(StorageError::from)
            .map_err(Into::into)
    }
}
