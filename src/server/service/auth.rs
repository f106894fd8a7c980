//! Account authentication service.
//!
//! Accounts carry no credentials. They log in by redeeming a one-time code: the bootstrap
//! code for the first admin, or a login code an admin issued for the account. The session
//! then identifies the account by user ID.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AccountLoginCode, UpsertUserParam, User},
    service::login_code::LoginCodeService,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    login_codes: &'a LoginCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, login_codes: &'a LoginCodeService) -> Self {
        Self { db, login_codes }
    }

    /// Redeems the bootstrap code and grants admin to the named account.
    ///
    /// The account is created if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(User)` - The promoted account
    /// - `Err(AppError::BadRequest)` - Code wrong, expired or already used
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn claim_admin(&self, code: &str, username: String) -> Result<User, AppError> {
        if !self.login_codes.redeem_bootstrap(code).await {
            return Err(AppError::BadRequest(
                "Invalid or expired admin code".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                username,
                is_admin: Some(true),
            })
            .await?;

        tracing::info!("Granted admin to user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Creates or updates an account and issues a login code for it.
    ///
    /// Leaving `is_admin` unset keeps the admin flag of an existing account, so the call
    /// doubles as "issue a new login code".
    pub async fn issue_account_code(
        &self,
        param: UpsertUserParam,
    ) -> Result<AccountLoginCode, AppError> {
        let user = UserRepository::new(self.db).upsert(param).await?;
        let login_code = self.login_codes.issue_login(user.id).await;

        tracing::info!("Issued login code for user {} ({})", user.username, user.id);

        Ok(AccountLoginCode { user, login_code })
    }

    /// Redeems a login code and returns the account it was issued for.
    ///
    /// # Returns
    /// - `Ok(User)` - The account to log in
    /// - `Err(AppError::BadRequest)` - Code wrong, expired or already used
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Account no longer exists
    pub async fn login(&self, code: &str) -> Result<User, AppError> {
        let Some(user_id) = self.login_codes.redeem_login(code).await else {
            return Err(AppError::BadRequest(
                "Invalid or expired login code".to_string(),
            ));
        };

        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
