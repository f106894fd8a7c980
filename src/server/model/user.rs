//! Dashboard account domain models.

use crate::model::user::{AccountLoginCodeDto, UpsertAccountDto, UserDto};

/// Dashboard account resolved from the session by the access-policy middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Whether the account may use admin-only routes.
    pub admin: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            admin: entity.admin,
        }
    }
}

/// Parameters for upserting an account by username.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub username: String,
    /// New admin status (None preserves existing admin status).
    pub is_admin: Option<bool>,
}

impl UpsertUserParam {
    pub fn from_dto(dto: UpsertAccountDto) -> Self {
        Self {
            username: dto.username,
            is_admin: dto.admin,
        }
    }
}

/// Account returned by the account endpoint along with its new login code.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountLoginCode {
    pub user: User,
    pub login_code: String,
}

impl AccountLoginCode {
    pub fn into_dto(self) -> AccountLoginCodeDto {
        AccountLoginCodeDto {
            user: self.user.into_dto(),
            login_code: self.login_code,
        }
    }
}
