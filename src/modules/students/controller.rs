use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use scholaris_core::AppError;
use scholaris_models::{
    MessageResponse, RegisterStudentDto, Student, StudentRegisteredResponse, StudentResponse,
    StudentSummary, UpdateStudentFeeDto,
};

use crate::middleware::role::RequireTeacher;
use crate::modules::parse_path_id;
use crate::modules::students::service::{NOT_FOUND, StudentService};
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedJsonOrDefault};

#[utoipa::path(
    post,
    path = "/api/auth/register/student",
    request_body = RegisterStudentDto,
    responses(
        (status = 201, description = "Student registered", body = StudentRegisteredResponse),
        (status = 400, description = "Missing field or email already registered", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Teacher only", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, teacher, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
    ValidatedJson(dto): ValidatedJson<RegisterStudentDto>,
) -> Result<(StatusCode, Json<StudentRegisteredResponse>), AppError> {
    let teacher_id = teacher.principal_id()?;
    let student =
        StudentService::register(&state.db, dto, teacher_id, state.password_config.bcrypt_cost)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentRegisteredResponse {
            message: "Student registered successfully".to_string(),
            user: StudentSummary::from(&student),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/all/student",
    responses(
        (status = 200, description = "Every Student", body = Vec<Student>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Teacher only", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, _teacher))]
pub async fn get_students(
    State(state): State<AppState>,
    _teacher: RequireTeacher,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list(&state.db).await?;
    Ok(Json(students))
}

#[utoipa::path(
    put,
    path = "/api/auth/update/student-fee/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    request_body = UpdateStudentFeeDto,
    responses(
        (status = 200, description = "Fee updated", body = StudentResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Teacher only", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, _teacher, dto))]
pub async fn update_student_fee(
    State(state): State<AppState>,
    _teacher: RequireTeacher,
    Path(id): Path<String>,
    ValidatedJsonOrDefault(dto): ValidatedJsonOrDefault<UpdateStudentFeeDto>,
) -> Result<Json<StudentResponse>, AppError> {
    let id = parse_path_id(&id, NOT_FOUND)?;
    let student = StudentService::update_fee(&state.db, id, dto).await?;

    Ok(Json(StudentResponse {
        message: "Student fee updated successfully".to_string(),
        user: student,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/auth/delete/student/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Teacher only", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, _teacher))]
pub async fn delete_student(
    State(state): State<AppState>,
    _teacher: RequireTeacher,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, NOT_FOUND)?;
    StudentService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
