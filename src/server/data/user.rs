//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing dashboard accounts. It handles
//! account upserts, lookups and admin existence checks with conversion between entity
//! models and domain models at the infrastructure boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user by username.
    ///
    /// Inserts a new user or updates an existing one. The admin status is only updated if
    /// explicitly provided (Some value), so a plain upsert never revokes admin privileges.
    ///
    /// # Arguments
    /// - `param` - Username and optional admin status
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![entity::user::Column::Username];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Username)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether an admin bootstrap code should be generated.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
