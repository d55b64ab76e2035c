use axum::{Json, extract::State};
use tracing::instrument;

use scholaris_core::{AppError, Role};
use scholaris_models::{LoginRequest, LoginResponse, MessageResponse};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

async fn login(
    state: &AppState,
    role: Role,
    dto: LoginRequest,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AuthService::login(&state.db, role, &dto, &state.jwt_config).await?;

    Ok(Json(LoginResponse {
        message: "Login success".to_string(),
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login/director",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid email or wrong password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_director(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    login(&state, Role::Director, dto).await
}

#[utoipa::path(
    post,
    path = "/api/auth/login/hod",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid email or wrong password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_hod(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    login(&state, Role::Hod, dto).await
}

#[utoipa::path(
    post,
    path = "/api/auth/login/teacher",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid email or wrong password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    login(&state, Role::Teacher, dto).await
}

#[utoipa::path(
    post,
    path = "/api/auth/login/student",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid email or wrong password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    login(&state, Role::Student, dto).await
}
