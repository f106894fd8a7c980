use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        subject::{CreateSubjectDto, SubjectDto},
    },
    server::{
        controller::IdPath,
        error::AppError,
        model::subject::{CreateSubjectParam, GetSubjectsParam, Subject},
        service::subject::SubjectService,
        state::AppState,
    },
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subject";

/// Query parameters for listing subjects.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectQuery {
    pub field_id: Option<i32>,
}

/// List subjects ordered by name.
///
/// Optionally restricted to one field with `?fieldId=`.
#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    params(
        ("fieldId" = Option<i32>, Query, description = "Only subjects of this field")
    ),
    responses(
        (status = 200, description = "Subjects", body = Vec<SubjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<impl IntoResponse, AppError> {
    let subjects = SubjectService::new(&state.db)
        .get_all(GetSubjectsParam {
            field_id: query.field_id,
        })
        .await?;

    let dto: Vec<SubjectDto> = subjects.into_iter().map(Subject::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a subject by ID.
#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject found", body = SubjectDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let subject = SubjectService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subject not found".to_string()))?;

    Ok((StatusCode::OK, Json(subject.into_dto())))
}

/// Create a subject within a field.
///
/// # Access Control
/// - `Admin` - Only admins can create subjects
#[utoipa::path(
    post,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = SubjectDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Field not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let subject = SubjectService::new(&state.db)
        .create(CreateSubjectParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(subject.into_dto())))
}
