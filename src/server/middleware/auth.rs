//! Access policy enforcement.
//!
//! Every route group carries an `AccessPolicy`. The middleware functions in this module
//! resolve the session user, check it against the group's policy and hand the user to
//! handlers through request extensions, so handlers never perform authorization
//! themselves.

use std::{fmt, str::FromStr};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    state::AppState,
};

/// Capability a caller needs to reach a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Anyone, logged in or not.
    #[default]
    Public,
    /// Any logged-in account.
    User,
    /// Logged-in accounts with the admin flag.
    Admin,
}

impl FromStr for AccessPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown access policy '{}'", other)),
        }
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Public => "public",
            Self::User => "user",
            Self::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// Resolves the session user and checks it against an access policy.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Checks the caller against `policy`.
    ///
    /// Public access never touches the session.
    ///
    /// # Returns
    /// - `Ok(None)` - Public policy
    /// - `Ok(Some(User))` - Caller satisfies the policy
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted account
    /// - `Err(AuthError::AccessDenied)` - Admin policy and the caller is not an admin
    pub async fn require(&self, policy: AccessPolicy) -> Result<Option<User>, AppError> {
        if policy == AccessPolicy::Public {
            return Ok(None);
        }

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if policy == AccessPolicy::Admin && !user.admin {
            return Err(AuthError::AccessDenied(
                user_id,
                "User attempted to access an admin route without admin permissions".to_string(),
            )
            .into());
        }

        Ok(Some(user))
    }
}

async fn enforce(
    state: &AppState,
    session: &Session,
    policy: AccessPolicy,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(user) = AuthGuard::new(&state.db, session).require(policy).await? {
        request.extensions_mut().insert(user);
    }

    Ok(next.run(request).await)
}

/// Route layer admitting any logged-in account.
pub async fn require_user(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    enforce(&state, &session, AccessPolicy::User, request, next).await
}

/// Route layer admitting admins only.
pub async fn require_admin(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    enforce(&state, &session, AccessPolicy::Admin, request, next).await
}

/// Route layer for aggregate reports, using the configured report policy.
pub async fn require_report_access(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = state.report_access;
    enforce(&state, &session, policy, request, next).await
}
