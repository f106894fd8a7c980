//! Aggregate report handlers.
//!
//! All report routes share the configurable report access policy.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        report::{
            AverageTotalMarksDto, PassRatesDto, StudentCountsDto, SubjectHighestMarksDto,
            TopStudentsDto,
        },
    },
    server::{error::AppError, service::report::ReportService, state::AppState},
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Average mark per field and per field/subject.
#[utoipa::path(
    get,
    path = "/api/students/average-total-marks",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Average marks", body = AverageTotalMarksDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_average_total_marks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db).average_total_marks().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Highest mark per field/subject.
#[utoipa::path(
    get,
    path = "/api/students/subjects-highest",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Highest marks", body = SubjectHighestMarksDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects_highest(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db).subjects_highest().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Student with the highest total per field.
#[utoipa::path(
    get,
    path = "/api/students/top-students",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Top student per field", body = TopStudentsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db).top_students().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Pass rate percentage per field/subject.
#[utoipa::path(
    get,
    path = "/api/students/passrate",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Pass rates", body = PassRatesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pass_rates(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db).pass_rates().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Number of students per field.
#[utoipa::path(
    get,
    path = "/api/students/count",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Student counts", body = StudentCountsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_counts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db).student_counts().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
