pub mod health;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::explanation::handlers::explanation_route;
use crate::explanation::prompts::Persona;
use crate::state::AppState;

/// Assembles the full router. `static_dir` is served under `/static` and its
/// `index.html` answers `GET /`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let api = Persona::ALL
        .into_iter()
        .fold(Router::new(), |router, persona| {
            router.route(persona.route(), explanation_route(persona))
        });

    api.route("/health", get(health::health_handler))
        // Frontend
        .nest_service("/static", ServeDir::new(static_dir))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .with_state(state)
}
