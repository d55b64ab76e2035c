use axum::{Router, routing::post};

use crate::modules::directors::controller::register_director;
use crate::state::AppState;

pub fn init_directors_router() -> Router<AppState> {
    Router::new().route("/register/director", post(register_director))
}
