use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AccountLoginCodeDto, ClaimAdminDto, LoginDto, UpsertAccountDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::{UpsertUserParam, User},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Claim admin with the bootstrap code.
///
/// Validates and consumes the one-time code logged at startup, grants admin to the
/// named account (creating it if needed) and logs the account in.
///
/// # Returns
/// - `200 OK` - Account promoted and logged in
/// - `400 Bad Request` - Code wrong, expired or already used
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/admin",
    tag = AUTH_TAG,
    request_body = ClaimAdminDto,
    responses(
        (status = 200, description = "Admin granted and session established", body = UserDto),
        (status = 400, description = "Invalid or expired admin code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClaimAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.login_codes)
        .claim_admin(&payload.code, payload.username)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in with a one-time login code issued by an admin.
///
/// # Returns
/// - `200 OK` - Session established for the account the code was issued for
/// - `400 Bad Request` - Code wrong, expired or already used
/// - `401 Unauthorized` - The account was removed after the code was issued
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid or expired login code", body = ErrorDto),
        (status = 401, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.login_codes)
        .login(&payload.code)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create or update an account and issue it a login code.
///
/// The code is handed to the account holder out of band and redeemed through
/// `POST /api/auth/login`. Issuing again replaces the previous code of that account.
///
/// # Access Control
/// - `Admin` - Only admins manage accounts
#[utoipa::path(
    post,
    path = "/api/auth/users",
    tag = AUTH_TAG,
    request_body = UpsertAccountDto,
    responses(
        (status = 200, description = "Account stored and login code issued", body = AccountLoginCodeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_account(
    State(state): State<AppState>,
    Json(payload): Json<UpsertAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.login_codes)
        .issue_account_code(UpsertUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Get the logged-in account.
///
/// # Access Control
/// - `User` - Any logged-in account
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(Extension(user): Extension<User>) -> impl IntoResponse {
    (StatusCode::OK, Json(user.into_dto()))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::NO_CONTENT
}
