//! Route table, access policy layers and API documentation.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        field::{CreateFieldDto, FieldDto, FieldSummaryDto},
        mark::{MarkDto, UpsertMarkDto},
        report::{
            AverageTotalMarksDto, PassRatesDto, StudentCountsDto, SubjectHighestMarksDto,
            TopStudentDto, TopStudentsDto,
        },
        student::{StudentDetailDto, StudentDto, UpdateStudentDto},
        subject::{CreateSubjectDto, SubjectDto},
        user::{AccountLoginCodeDto, ClaimAdminDto, LoginDto, UpsertAccountDto, UserDto},
    },
    server::{
        controller::{auth, field, report, student, subject},
        middleware::{
            auth::{require_admin, require_report_access, require_user},
            cors::cors_layer,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "University Dashboard API"),
    paths(
        auth::claim_admin,
        auth::login,
        auth::upsert_account,
        auth::get_user,
        auth::logout,
        student::get_students,
        student::get_student,
        student::update_student,
        student::delete_student,
        student::upsert_mark,
        report::get_average_total_marks,
        report::get_subjects_highest,
        report::get_top_students,
        report::get_pass_rates,
        report::get_student_counts,
        field::get_fields,
        field::get_field,
        field::create_field,
        subject::get_subjects,
        subject::get_subject,
        subject::create_subject,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        ClaimAdminDto,
        LoginDto,
        UpsertAccountDto,
        AccountLoginCodeDto,
        StudentDto,
        StudentDetailDto,
        UpdateStudentDto,
        MarkDto,
        UpsertMarkDto,
        FieldDto,
        FieldSummaryDto,
        CreateFieldDto,
        SubjectDto,
        CreateSubjectDto,
        AverageTotalMarksDto,
        SubjectHighestMarksDto,
        TopStudentDto,
        TopStudentsDto,
        PassRatesDto,
        StudentCountsDto,
    )),
    tags(
        (name = "auth", description = "Accounts, login codes and session"),
        (name = "student", description = "Students and marks"),
        (name = "report", description = "Aggregate reports"),
        (name = "field", description = "Fields of study"),
        (name = "subject", description = "Subjects"),
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// Routes are grouped by access policy and each group carries its policy as a route
/// layer. The session layer is applied by the caller.
pub fn router(state: AppState, cors_allowed_domain: String) -> Router {
    let public = Router::new()
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/admin", post(auth::claim_admin))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/fields", get(field::get_fields))
        .route("/api/fields/{id}", get(field::get_field))
        .route("/api/subjects", get(subject::get_subjects))
        .route("/api/subjects/{id}", get(subject::get_subject));

    let user = Router::new()
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/students/{id}", get(student::get_student))
        .route_layer(from_fn_with_state(state.clone(), require_user));

    let admin = Router::new()
        .route("/api/auth/users", post(auth::upsert_account))
        .route("/api/students", get(student::get_students))
        .route(
            "/api/students/{id}",
            put(student::update_student).delete(student::delete_student),
        )
        .route("/api/students/marks", post(student::upsert_mark))
        .route("/api/fields", post(field::create_field))
        .route("/api/subjects", post(subject::create_subject))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    let reports = Router::new()
        .route(
            "/api/students/average-total-marks",
            get(report::get_average_total_marks),
        )
        .route(
            "/api/students/subjects-highest",
            get(report::get_subjects_highest),
        )
        .route("/api/students/top-students", get(report::get_top_students))
        .route("/api/students/passrate", get(report::get_pass_rates))
        .route("/api/students/count", get(report::get_student_counts))
        .route_layer(from_fn_with_state(state.clone(), require_report_access));

    Router::new()
        .merge(public)
        .merge(user)
        .merge(admin)
        .merge(reports)
        .with_state(state)
        .layer(cors_layer(cors_allowed_domain))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
