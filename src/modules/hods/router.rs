use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::modules::hods::controller::{delete_hod, get_hods, register_hod, update_hod_salary};
use crate::state::AppState;

pub fn init_hods_router() -> Router<AppState> {
    Router::new()
        .route("/register/hod", post(register_hod))
        .route("/all/hods", get(get_hods))
        .route("/update/hod-salary/{id}", put(update_hod_salary))
        .route("/delete/hod/{id}", delete(delete_hod))
}
