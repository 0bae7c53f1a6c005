//! User repository implementation.
//!
//! Absence is never an error at this layer: lookups return `Option` and
//! writes report affected row counts. The service decides what a missing
//! row means.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in no particular order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// User with the given ID, if any
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Persist a new user; storage assigns the ID
    async fn insert(&self, input: CreateUser) -> AppResult<User>;

    /// Apply the present fields of `changes`, returning the affected row count
    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<u64>;

    /// Remove the user, returning the affected row count
    async fn delete_by_id(&self, id: i32) -> AppResult<u64>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, input: CreateUser) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from_write_error)?;

        tracing::debug!(user_id = model.id, "User row inserted");
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<u64> {
        // Nothing to write: report whether the row exists so callers still
        // see 0 for an unknown ID.
        if changes.is_empty() {
            return UserEntity::find_by_id(id)
                .count(&self.db)
                .await
                .map_err(AppError::from);
        }

        let mut query = UserEntity::update_many().filter(user::Column::Id.eq(id));

        if let Some(name) = changes.name {
            query = query.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(email) = changes.email {
            query = query.col_expr(user::Column::Email, Expr::value(email));
        }

        let result = query
            .exec(&self.db)
            .await
            .map_err(AppError::from_write_error)?;

        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
