pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route("/api/v1/resume", post(generation::handle_generate_resume))
        .route(
            "/api/v1/cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        // Display and export
        .route("/api/v1/render/html", post(render::handle_render_html))
        .route("/api/v1/export/txt", post(render::handle_export_txt))
        .route("/api/v1/export/pdf", post(render::handle_export_pdf))
        .with_state(state)
}
