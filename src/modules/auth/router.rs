use axum::{Router, routing::post};

use crate::modules::auth::controller::{login_director, login_hod, login_student, login_teacher};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login/director", post(login_director))
        .route("/login/hod", post(login_hod))
        .route("/login/teacher", post(login_teacher))
        .route("/login/student", post(login_student))
}
