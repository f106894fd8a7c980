use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        field::{CreateFieldDto, FieldDto},
    },
    server::{
        controller::IdPath,
        error::AppError,
        model::field::{CreateFieldParam, Field},
        service::field::FieldService,
        state::AppState,
    },
};

/// Tag for grouping field endpoints in OpenAPI documentation
pub static FIELD_TAG: &str = "field";

/// List fields of study ordered by name.
#[utoipa::path(
    get,
    path = "/api/fields",
    tag = FIELD_TAG,
    responses(
        (status = 200, description = "All fields", body = Vec<FieldDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fields(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let fields = FieldService::new(&state.db).get_all().await?;

    let dto: Vec<FieldDto> = fields.into_iter().map(Field::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a field by ID.
#[utoipa::path(
    get,
    path = "/api/fields/{id}",
    tag = FIELD_TAG,
    params(
        ("id" = i32, Path, description = "Field ID")
    ),
    responses(
        (status = 200, description = "Field found", body = FieldDto),
        (status = 404, description = "Field not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_field(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let field = FieldService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Field not found".to_string()))?;

    Ok((StatusCode::OK, Json(field.into_dto())))
}

/// Create a field of study.
///
/// # Access Control
/// - `Admin` - Only admins can create fields
#[utoipa::path(
    post,
    path = "/api/fields",
    tag = FIELD_TAG,
    request_body = CreateFieldDto,
    responses(
        (status = 201, description = "Field created", body = FieldDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_field(
    State(state): State<AppState>,
    Json(payload): Json<CreateFieldDto>,
) -> Result<impl IntoResponse, AppError> {
    let field = FieldService::new(&state.db)
        .create(CreateFieldParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(field.into_dto())))
}
