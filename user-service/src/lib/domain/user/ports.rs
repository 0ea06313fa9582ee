use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed credential.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Credential hashing failed
    /// * `DatabaseError` - Storage operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify a username/password pair against the stored credential.
    ///
    /// Returns the user only when the account exists, the password matches,
    /// and the account is active. Every failure mode is reported as the
    /// single `InvalidCredentials` variant.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Lookup miss, password mismatch, or inactive account
    /// * `DatabaseError` - Storage operation failed
    async fn authenticate_user(&self, username: &Username, password: &str)
        -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Storage operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;

    /// Activate or deactivate an account.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate (the account directory).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier, `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username, `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address, `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;

    /// Flip the account's active flag and return the updated user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn set_active(&self, id: &UserId, active: bool) -> Result<User, UserError>;
}
