//! User registration and lookup

use tracing::debug;

use crate::traits::*;
use crate::types::*;

/// User manager for handling the participant registry
pub struct UserManager<S: LedgerStore> {
    storage: S,
    validator: Box<dyn UserValidator>,
}

impl<S: LedgerStore> UserManager<S> {
    /// Create a new user manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultUserValidator),
        }
    }

    /// Create a new user manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn UserValidator>) -> Self {
        Self { storage, validator }
    }

    /// Register a new user
    pub async fn register_user(&mut self, id: i64, name: String) -> LedgerResult<User> {
        let user = User::new(id, name);

        // Validate the user
        self.validator.validate_user(&user)?;

        // Check if the id is already taken
        if self.storage.get_user(id).await?.is_some() {
            return Err(LedgerError::DuplicateUser(id));
        }

        // Save the user
        self.storage.save_user(&user).await?;
        debug!(user_id = id, name = %user.name, "registered user");

        Ok(user)
    }

    /// Get a user by id
    pub async fn get_user(&self, user_id: i64) -> LedgerResult<Option<User>> {
        self.storage.get_user(user_id).await
    }

    /// Get a user by id, returning an error if not found
    pub async fn get_user_required(&self, user_id: i64) -> LedgerResult<User> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or(LedgerError::UserNotFound(user_id))
    }

    /// List all users in registration order
    pub async fn list_users(&self) -> LedgerResult<Vec<User>> {
        self.storage.list_users().await
    }

    /// Number of registered users
    pub async fn user_count(&self) -> LedgerResult<usize> {
        self.storage.user_count().await
    }
}
