pub(crate) mod users_errors;
pub(crate) mod users_model;
pub(crate) mod users_service;
pub(crate) mod users_traits;

#[cfg(test)]
mod users_service_tests;

pub use users_errors::UserError;
pub use users_model::{NewUser, User, UserProfileUpdate};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
