use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Composes the account directory with the credential hasher. Hashing and
/// verification are CPU-bound, so both run on the blocking thread pool
/// rather than the request dispatch path.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let hasher = self.password_hasher.clone();
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let hasher = self.password_hasher.clone();
        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        if !matches {
            return Err(UserError::InvalidCredentials);
        }
        if !user.is_active {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }

    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, UserError> {
        self.repository.set_active(id, active).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
            async fn set_active(&self, id: &UserId, active: bool) -> Result<User, UserError>;
        }
    }

    fn stored_user(username: &str, password: &str, is_active: bool) -> User {
        let hash = auth::PasswordHasher::new().hash(password).unwrap();
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
            password_hash: hash,
            is_active,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.is_active
                    && user.password_hash.starts_with("$2")
                    && user.password_hash != "password123"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let user = service.register_user(command).await.unwrap();
        assert!(auth::PasswordHasher::new().verify("password123", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test2@example.com".to_string()).unwrap(),
            password: "password456".to_string(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_user_success() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "secret123", true);

        let returned = user.clone();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("alice".to_string()).unwrap();
        let authenticated = service
            .authenticate_user(&username, "secret123")
            .await
            .unwrap();
        assert_eq!(authenticated.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_authenticate_user_wrong_password() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "secret123", true);

        let returned = user.clone();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("alice".to_string()).unwrap();
        let result = service.authenticate_user(&username, "wrong").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_user_unknown_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("nobody".to_string()).unwrap();
        let result = service.authenticate_user(&username, "secret123").await;
        // Same outcome as a wrong password.
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_user_inactive_account() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "secret123", false);

        let returned = user.clone();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("alice".to_string()).unwrap();
        let result = service.authenticate_user(&username, "secret123").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_set_user_active() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "secret123", true);
        let user_id = user.id;

        repository
            .expect_set_active()
            .withf(move |id, active| *id == user_id && !active)
            .times(1)
            .returning(move |_, active| {
                let mut updated = stored_user("alice", "secret123", true);
                updated.is_active = active;
                Ok(updated)
            });

        let service = UserService::new(Arc::new(repository));

        let updated = service.set_user_active(&user_id, false).await.unwrap();
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();

        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(UserError::NotFound(user_id.to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_user(&user_id).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
