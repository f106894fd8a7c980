//! HTTP request handlers.
//!
//! Controllers convert DTOs to parameter models, call the service layer and convert the
//! resulting domain models back to DTOs. Access control is applied by route layers in the
//! router, so handlers only see requests that already passed their group's policy.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::AppError;

pub mod auth;
pub mod field;
pub mod report;
pub mod student;
pub mod subject;

/// Numeric `{id}` path segment.
///
/// Rejects like every other handler error, with a JSON `{"message": ...}` body.
pub struct IdPath(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}
