use axum::Json;
use serde::Serialize;

use crate::explanation::prompts::Persona;
use crate::llm_client::MODEL;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Completion model every persona is sent to.
    pub model: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// GET /health
/// Liveness check. Never calls the completion provider.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        model: MODEL,
        endpoints: Persona::ALL.iter().map(|p| p.route()).collect(),
    })
}
