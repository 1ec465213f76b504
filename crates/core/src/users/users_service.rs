use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::users::users_errors::UserError;
use crate::users::users_model::{NewUser, User, UserProfileUpdate};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::Result;

/// Account management over the user repository.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl UserServiceTrait for UserService {
    fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let email = new_user.email.trim().to_lowercase();
        if self.repository.find_by_email(&email)?.is_some() {
            return Err(UserError::EmailTaken(email).into());
        }

        let user = self.repository.create_user(new_user.into_user(Utc::now()))?;
        info!("registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .find_by_id(user_id)?
            .ok_or_else(|| UserError::NotFound(user_id.to_string()).into())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&email.trim().to_lowercase())
    }

    fn touch_last_login(&self, user_id: &str) -> Result<()> {
        self.repository.touch_last_login(user_id, Utc::now())
    }

    fn update_profile(&self, user_id: &str, update: UserProfileUpdate) -> Result<User> {
        let mut user = self.get_user(user_id)?;
        if let Some(first_name) = update.first_name {
            let trimmed = first_name.trim().to_string();
            if trimmed.is_empty() {
                return Err(
                    UserError::InvalidData("First name cannot be empty".to_string()).into(),
                );
            }
            user.first_name = trimmed;
        }
        if let Some(last_name) = update.last_name {
            let trimmed = last_name.trim().to_string();
            if trimmed.is_empty() {
                return Err(
                    UserError::InvalidData("Last name cannot be empty".to_string()).into(),
                );
            }
            user.last_name = trimmed;
        }
        user.updated_at = Utc::now();
        self.repository.update_user(user)
    }

    fn list_user_ids(&self) -> Result<Vec<String>> {
        self.repository.list_user_ids()
    }
}
