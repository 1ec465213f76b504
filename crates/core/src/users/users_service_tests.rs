use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::errors::Error;
use crate::users::{
    NewUser, User, UserError, UserProfileUpdate, UserRepositoryTrait, UserService,
    UserServiceTrait,
};
use crate::Result;

#[derive(Default)]
struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

impl UserRepositoryTrait for MockUserRepository {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    fn create_user(&self, user: User) -> Result<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    fn update_user(&self, user: User) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        users.retain(|u| u.id != user.id);
        users.push(user.clone());
        Ok(user)
    }

    fn touch_last_login(&self, user_id: &str, at: DateTime<Utc>) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.last_login_at = Some(at);
        }
        Ok(())
    }

    fn list_user_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.is_active)
            .map(|u| u.id.clone())
            .collect())
    }
}

fn service() -> UserService {
    UserService::new(Arc::new(MockUserRepository::default()))
}

fn signup(email: &str) -> NewUser {
    NewUser {
        first_name: " Ada ".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
    }
}

#[test]
fn register_normalizes_names_and_email() {
    let svc = service();
    let user = svc.register(signup("  Ada@Example.COM ")).unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.first_name, "Ada");
    assert!(user.is_active);
    assert!(user.last_login_at.is_none());
}

#[test]
fn duplicate_email_is_rejected_case_insensitively() {
    let svc = service();
    svc.register(signup("ada@example.com")).unwrap();

    let err = svc.register(signup("ADA@example.com")).unwrap_err();
    assert!(matches!(
        err,
        Error::User(UserError::EmailTaken(ref e)) if e == "ada@example.com"
    ));
}

#[test]
fn malformed_email_is_rejected() {
    let svc = service();
    let err = svc.register(signup("not-an-email")).unwrap_err();
    assert!(matches!(err, Error::User(UserError::InvalidData(_))));
}

#[test]
fn get_unknown_user_is_not_found() {
    let svc = service();
    let err = svc.get_user("missing").unwrap_err();
    assert!(matches!(err, Error::User(UserError::NotFound(_))));
}

#[test]
fn touch_last_login_stamps_the_user() {
    let svc = service();
    let user = svc.register(signup("ada@example.com")).unwrap();

    svc.touch_last_login(&user.id).unwrap();
    assert!(svc.get_user(&user.id).unwrap().last_login_at.is_some());
}

#[test]
fn update_profile_rejects_blank_names() {
    let svc = service();
    let user = svc.register(signup("ada@example.com")).unwrap();

    let updated = svc
        .update_profile(
            &user.id,
            UserProfileUpdate {
                first_name: Some("Augusta".to_string()),
                last_name: None,
            },
        )
        .unwrap();
    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, "Lovelace");

    let err = svc
        .update_profile(
            &user.id,
            UserProfileUpdate {
                first_name: Some("   ".to_string()),
                last_name: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::User(UserError::InvalidData(_))));
}
