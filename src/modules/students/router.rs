use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::modules::students::controller::{
    delete_student, get_students, register_student, update_student_fee,
};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/register/student", post(register_student))
        .route("/all/student", get(get_students))
        .route("/update/student-fee/{id}", put(update_student_fee))
        .route("/delete/student/{id}", delete(delete_student))
}
