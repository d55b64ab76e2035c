use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::modules::teachers::controller::{
    delete_teacher, get_teachers, register_teacher, update_teacher_salary,
};
use crate::state::AppState;

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/register/teacher", post(register_teacher))
        .route("/all/teachers", get(get_teachers))
        .route("/update/teacher-salary/{id}", put(update_teacher_salary))
        .route("/delete/teacher/{id}", delete(delete_teacher))
}
