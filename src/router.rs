use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use scholaris_observability::logging_middleware;

use crate::docs::ApiDoc;
use crate::modules::auth::router::init_auth_router;
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::directors::router::init_directors_router;
use crate::modules::hods::router::init_hods_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;

async fn health() -> &'static str {
    "API is working"
}

pub fn init_router(state: AppState) -> Router {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true);

    Router::new()
        .route("/", get(health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api/auth",
            Router::new()
                .merge(init_auth_router())
                .merge(init_directors_router())
                .merge(init_hods_router())
                .merge(init_teachers_router())
                .merge(init_students_router())
                .merge(init_dashboard_router()),
        )
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use scholaris_config::{CorsConfig, JwtConfig, PasswordConfig, RegistrationConfig};
    use scholaris_db::init_memory_pool;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_wildcard_origin_does_not_break_startup() {
        let state = AppState {
            db: init_memory_pool().await.unwrap(),
            jwt_config: JwtConfig {
                secret: "secret".to_string(),
                token_expiry: 60,
            },
            cors_config: CorsConfig {
                allowed_origins: vec!["*".to_string(), "http://localhost:3000".to_string()],
            },
            password_config: PasswordConfig::with_cost(4),
            registration_config: RegistrationConfig::default(),
        };

        let response = init_router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
