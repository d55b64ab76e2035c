use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use scholaris_auth::Claims;
use scholaris_models::MessageResponse;

use crate::middleware::auth::AuthUser;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub message: String,
    pub user: Claims,
}

/// Echoes the decoded token of any authenticated principal.
#[utoipa::path(
    get,
    path = "/api/auth/Deshboard",
    responses(
        (status = 200, description = "Decoded token claims", body = DashboardResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboard"
)]
#[instrument(skip(auth_user), fields(id = %auth_user.0.id, role = %auth_user.0.role))]
pub async fn get_dashboard(auth_user: AuthUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Protected data".to_string(),
        user: auth_user.0,
    })
}
