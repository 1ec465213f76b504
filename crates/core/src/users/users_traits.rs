use chrono::{DateTime, Utc};

use crate::users::users_model::{NewUser, User, UserProfileUpdate};
use crate::Result;

/// Trait defining the contract for user persistence.
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    fn create_user(&self, user: User) -> Result<User>;

    fn update_user(&self, user: User) -> Result<User>;

    fn touch_last_login(&self, user_id: &str, at: DateTime<Utc>) -> Result<()>;

    /// IDs of every active user, for background sweeps.
    fn list_user_ids(&self) -> Result<Vec<String>>;
}

/// Trait defining the contract for user account operations.
pub trait UserServiceTrait: Send + Sync {
    /// Register a new account; the email must not be taken.
    fn register(&self, new_user: NewUser) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<User>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    fn touch_last_login(&self, user_id: &str) -> Result<()>;

    fn update_profile(&self, user_id: &str, update: UserProfileUpdate) -> Result<User>;

    fn list_user_ids(&self) -> Result<Vec<String>>;
}
