//! User service - Handles user-related business logic.
//!
//! Translates repository outcomes into domain results. A missing row,
//! whether from a lookup or from zero affected rows, becomes
//! `AppError::NotFound`; every other error passes through untouched.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::notification::Notifier;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Get a user by ID
    async fn find_one(&self, id: i32) -> AppResult<User>;

    /// Create a user from already validated input
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Apply the present fields and return the stored result
    async fn update(&self, id: i32, input: UpdateUser) -> AppResult<User>;

    /// Permanently delete a user
    async fn remove(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    notifier: Arc<dyn Notifier>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }
}

fn welcome_message(user: &User) -> String {
    format!("Welcome, {}! Your account has been created.", user.name)
}

#[async_trait]
impl UserService for UserManager {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn find_one(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found(id)
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let user = self.repo.insert(input).await?;

        tracing::info!(user_id = user.id, "User created");
        self.notifier.send_email(&user.email, &welcome_message(&user));

        Ok(user)
    }

    async fn update(&self, id: i32, input: UpdateUser) -> AppResult<User> {
        let affected = self.repo.update(id, input).await?;
        tracing::debug!(user_id = id, affected, "User update applied");

        // Not atomic with the update: a concurrent delete also ends here.
        self.repo.find_by_id(id).await?.ok_or_not_found(id)
    }

    async fn remove(&self, id: i32) -> AppResult<()> {
        let affected = self.repo.delete_by_id(id).await?;

        if affected == 0 {
            return Err(AppError::NotFound(id));
        }

        tracing::info!(user_id = id, "User removed");
        Ok(())
    }
}
