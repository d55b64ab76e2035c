use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::{StatusCode, request::Parts},
};
use tracing::instrument;

use scholaris_core::AppError;
use scholaris_models::{MessageResponse, RegisterDirectorDto};

use crate::modules::directors::service::DirectorService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Admits the request only while open Director signup is enabled. Runs
/// before the body is read.
pub struct DirectorSignupOpen;

impl FromRequestParts<AppState> for DirectorSignupOpen {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.registration_config.allow_director_signup {
            return Err(AppError::forbidden("Director signup is disabled"));
        }
        Ok(DirectorSignupOpen)
    }
}

/// Open registration of the hierarchy root, unless disabled by
/// `ALLOW_DIRECTOR_SIGNUP=false`.
#[utoipa::path(
    post,
    path = "/api/auth/register/director",
    request_body = RegisterDirectorDto,
    responses(
        (status = 201, description = "Director registered", body = MessageResponse),
        (status = 400, description = "Missing field or email already registered", body = MessageResponse),
        (status = 403, description = "Director signup is disabled", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Directors"
)]
#[instrument(skip(state, _open, dto))]
pub async fn register_director(
    State(state): State<AppState>,
    _open: DirectorSignupOpen,
    ValidatedJson(dto): ValidatedJson<RegisterDirectorDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    DirectorService::register(&state.db, dto, state.password_config.bcrypt_cost).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Director registered successfully")),
    ))
}
