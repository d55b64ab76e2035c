use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use scholaris_core::AppError;
use scholaris_models::{
    MessageResponse, RegisterTeacherDto, Teacher, TeacherResponse, UpdateTeacherSalaryDto,
};

use crate::middleware::role::RequireHod;
use crate::modules::parse_path_id;
use crate::modules::teachers::service::{NOT_FOUND, TeacherService};
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedJsonOrDefault};

#[utoipa::path(
    post,
    path = "/api/auth/register/teacher",
    request_body = RegisterTeacherDto,
    responses(
        (status = 201, description = "Teacher registered", body = TeacherResponse),
        (status = 400, description = "Missing field or email already registered", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "HOD only", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, hod, dto))]
pub async fn register_teacher(
    State(state): State<AppState>,
    RequireHod(hod): RequireHod,
    ValidatedJson(dto): ValidatedJson<RegisterTeacherDto>,
) -> Result<(StatusCode, Json<TeacherResponse>), AppError> {
    let hod_id = hod.principal_id()?;
    let teacher =
        TeacherService::register(&state.db, dto, hod_id, state.password_config.bcrypt_cost)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(TeacherResponse {
            message: "Teacher registered successfully".to_string(),
            user: teacher,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/all/teachers",
    responses(
        (status = 200, description = "Every Teacher", body = Vec<Teacher>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "HOD only", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _hod))]
pub async fn get_teachers(
    State(state): State<AppState>,
    _hod: RequireHod,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::list(&state.db).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    put,
    path = "/api/auth/update/teacher-salary/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherSalaryDto,
    responses(
        (status = 200, description = "Salary updated", body = TeacherResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "HOD only", body = MessageResponse),
        (status = 404, description = "Teacher not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _hod, dto))]
pub async fn update_teacher_salary(
    State(state): State<AppState>,
    _hod: RequireHod,
    Path(id): Path<String>,
    ValidatedJsonOrDefault(dto): ValidatedJsonOrDefault<UpdateTeacherSalaryDto>,
) -> Result<Json<TeacherResponse>, AppError> {
    let id = parse_path_id(&id, NOT_FOUND)?;
    let teacher = TeacherService::update_salary(&state.db, id, dto).await?;

    Ok(Json(TeacherResponse {
        message: "Teacher salary updated successfully".to_string(),
        user: teacher,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/auth/delete/teacher/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "HOD only", body = MessageResponse),
        (status = 404, description = "Teacher not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, _hod))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    _hod: RequireHod,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, NOT_FOUND)?;
    TeacherService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}
