//! End-to-end authentication flow against an in-memory directory.
//!
//! Exercises registration, duplicate detection, login, and request
//! authentication without any network or database.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::IdentityGate;
use auth::TokenCodec;
use auth::TokenKind;
use chrono::Duration;
use user_service::domain::user::models::EmailAddress;
use user_service::domain::user::models::RegisterUserCommand;
use user_service::domain::user::models::User;
use user_service::domain::user::models::UserId;
use user_service::domain::user::models::Username;
use user_service::domain::user::ports::UserRepository;
use user_service::domain::user::ports::UserServicePort;
use user_service::domain::user::service::UserService;
use user_service::user::errors::UserError;

const SECRET: &[u8] = b"test-secret-key-for-signing-at-least-32-bytes";

#[derive(Default)]
struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| &u.id != id);
        if users.len() == before {
            return Err(UserError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn set_active(&self, id: &UserId, active: bool) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(UserError::NotFound(id.to_string()))?;
        user.is_active = active;
        Ok(user.clone())
    }
}

fn register_command(username: &str, email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand::new(
        Username::new(username.to_string()).unwrap(),
        EmailAddress::new(email.to_string()).unwrap(),
        password.to_string(),
    )
}

#[tokio::test]
async fn test_register_login_and_gate_flow() {
    let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
    let codec = TokenCodec::new(SECRET);
    let gate = IdentityGate::new(SECRET);

    // Register
    let user = service
        .register_user(register_command("alice", "a@x.com", "secret123"))
        .await
        .expect("Registration failed");
    assert_eq!(user.username.as_str(), "alice");
    assert!(user.is_active);

    // Same username again is a duplicate
    let duplicate = service
        .register_user(register_command("alice", "other@x.com", "secret123"))
        .await;
    assert!(matches!(
        duplicate.unwrap_err(),
        UserError::UsernameAlreadyExists(_)
    ));

    // Login with the right password, then mint and present an access token
    let username = Username::new("alice".to_string()).unwrap();
    let authenticated = service
        .authenticate_user(&username, "secret123")
        .await
        .expect("Login failed");

    let token = codec
        .issue(
            authenticated.username.as_str(),
            TokenKind::Access,
            Duration::minutes(30),
        )
        .expect("Failed to issue token");

    let identity = gate
        .authenticate(&format!("Bearer {token}"))
        .expect("Gate rejected a fresh access token");
    assert_eq!(identity.subject, "alice");

    // Wrong password is a uniform credential failure
    let wrong = service.authenticate_user(&username, "wrong").await;
    assert!(matches!(wrong.unwrap_err(), UserError::InvalidCredentials));
}

#[tokio::test]
async fn test_deactivated_account_cannot_login() {
    let service = UserService::new(Arc::new(InMemoryUserRepository::default()));

    let user = service
        .register_user(register_command("bob", "b@x.com", "secret123"))
        .await
        .expect("Registration failed");

    service
        .set_user_active(&user.id, false)
        .await
        .expect("Deactivation failed");

    let username = Username::new("bob".to_string()).unwrap();
    let result = service.authenticate_user(&username, "secret123").await;
    // Indistinguishable from a bad password.
    assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let service = UserService::new(Arc::new(InMemoryUserRepository::default()));

    service
        .register_user(register_command("carol", "c@x.com", "secret123"))
        .await
        .expect("Registration failed");

    let duplicate = service
        .register_user(register_command("carol2", "c@x.com", "secret123"))
        .await;
    assert!(matches!(
        duplicate.unwrap_err(),
        UserError::EmailAlreadyExists(_)
    ));
}
