use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use scholaris_core::AppError;
use scholaris_models::{Hod, MessageResponse, RegisterHodDto, UpdateHodSalaryDto};

use crate::middleware::role::RequireDirector;
use crate::modules::hods::service::{HodService, NOT_FOUND};
use crate::modules::parse_path_id;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedJsonOrDefault};

#[utoipa::path(
    post,
    path = "/api/auth/register/hod",
    request_body = RegisterHodDto,
    responses(
        (status = 201, description = "HOD registered", body = MessageResponse),
        (status = 400, description = "Missing field or email already registered", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Director only", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "HODs"
)]
#[instrument(skip(state, director, dto))]
pub async fn register_hod(
    State(state): State<AppState>,
    RequireDirector(director): RequireDirector,
    ValidatedJson(dto): ValidatedJson<RegisterHodDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let director_id = director.principal_id()?;
    HodService::register(&state.db, dto, director_id, state.password_config.bcrypt_cost).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("HOD registered successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/all/hods",
    responses(
        (status = 200, description = "Every HOD", body = Vec<Hod>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Director only", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "HODs"
)]
#[instrument(skip(state, _director))]
pub async fn get_hods(
    State(state): State<AppState>,
    _director: RequireDirector,
) -> Result<Json<Vec<Hod>>, AppError> {
    let hods = HodService::list(&state.db).await?;
    Ok(Json(hods))
}

#[utoipa::path(
    put,
    path = "/api/auth/update/hod-salary/{id}",
    params(
        ("id" = String, Path, description = "HOD ID")
    ),
    request_body = UpdateHodSalaryDto,
    responses(
        (status = 200, description = "Salary replaced", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Director only", body = MessageResponse),
        (status = 404, description = "HOD not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "HODs"
)]
#[instrument(skip(state, _director, dto))]
pub async fn update_hod_salary(
    State(state): State<AppState>,
    _director: RequireDirector,
    Path(id): Path<String>,
    ValidatedJsonOrDefault(dto): ValidatedJsonOrDefault<UpdateHodSalaryDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, NOT_FOUND)?;
    HodService::update_salary(&state.db, id, dto).await?;

    Ok(Json(MessageResponse::new("HOD salary updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/auth/delete/hod/{id}",
    params(
        ("id" = String, Path, description = "HOD ID")
    ),
    responses(
        (status = 200, description = "HOD deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Director only", body = MessageResponse),
        (status = 404, description = "HOD not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "HODs"
)]
#[instrument(skip(state, _director))]
pub async fn delete_hod(
    State(state): State<AppState>,
    _director: RequireDirector,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, NOT_FOUND)?;
    HodService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("HOD deleted successfully")))
}
