use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add_workout))
        .route("/add-auto", post(handlers::add_workout_auto))
        .route("/user/save", post(handlers::save_profile))
        .route("/summary", get(handlers::summary))
        .route("/export/pdf", get(handlers::export_pdf))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/daily", get(handlers::get_daily))
        .fallback(handlers::not_found)
        .with_state(state)
}
