use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub admin: bool,
}

/// Claims the one-time admin bootstrap code for an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAdminDto {
    pub code: String,
    pub username: String,
}

/// Creates an account or updates an existing one by username.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAccountDto {
    pub username: String,
    /// Omit to keep the admin flag of an existing account (new accounts default to false).
    #[serde(default)]
    pub admin: Option<bool>,
}

/// Account together with a fresh one-time login code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountLoginCodeDto {
    pub user: UserDto,
    pub login_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub code: String,
}
