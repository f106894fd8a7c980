use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mark::{MarkDto, UpsertMarkDto},
        student::{StudentDetailDto, StudentDto, UpdateStudentDto},
    },
    server::{
        controller::IdPath,
        error::AppError,
        model::{
            mark::{UpsertMarkOutcome, UpsertMarkParam},
            student::{StudentDetail, UpdateStudentParam},
        },
        service::{mark::MarkService, student::StudentService},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students with their field and marks.
///
/// Students without marks are included with an empty `marks` list.
///
/// # Access Control
/// - `Admin` - Only admins can list every student
///
/// # Returns
/// - `200 OK` - Students ordered by ID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students with marks", body = Vec<StudentDetailDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    let dto: Vec<StudentDetailDto> = students
        .into_iter()
        .map(StudentDetail::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get one student with its field and marks.
///
/// # Access Control
/// - `User` - Any logged-in account
///
/// # Returns
/// - `200 OK` - Student found
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student with marks", body = StudentDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Update a student's username, enrollment year and field.
///
/// # Access Control
/// - `Admin` - Only admins can update students
///
/// # Returns
/// - `200 OK` - Updated student
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Student or field not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Student or field not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .update(UpdateStudentParam::from_dto(id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student and its marks.
///
/// # Access Control
/// - `Admin` - Only admins can delete students
///
/// # Returns
/// - `204 No Content` - Student deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let deleted = StudentService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Student not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Create or replace the mark of a student in a subject.
///
/// # Access Control
/// - `Admin` - Only admins can record marks
///
/// # Returns
/// - `201 Created` - No mark existed for the pair
/// - `200 OK` - The existing mark was overwritten
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Student or subject not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students/marks",
    tag = STUDENT_TAG,
    request_body = UpsertMarkDto,
    responses(
        (status = 201, description = "Mark created", body = MarkDto),
        (status = 200, description = "Mark updated", body = MarkDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Student or subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_mark(
    State(state): State<AppState>,
    Json(payload): Json<UpsertMarkDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = MarkService::new(&state.db)
        .upsert(UpsertMarkParam::from_dto(payload))
        .await?;

    let (status, mark) = match outcome {
        UpsertMarkOutcome::Created(mark) => (StatusCode::CREATED, mark),
        UpsertMarkOutcome::Updated(mark) => (StatusCode::OK, mark),
    };

    Ok((status, Json(mark.into_dto())))
}
