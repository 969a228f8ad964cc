//! Axum route handlers for the Explanation API.

use axum::{
    extract::{FromRequest, State},
    routing::{post, MethodRouter},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::explanation::prompts::{build_user_message, Persona};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of every explanation request. Only the type is checked; empty and
/// arbitrarily long excerpts are accepted.
#[derive(Debug, Deserialize)]
pub struct ExcerptRequest {
    pub excerpt: String,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

/// `Json` extractor whose rejection renders through `AppError`, so malformed
/// bodies get the same `{"detail": ...}` shape as provider failures.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Builds the POST handler for one persona. The router mounts it once per
/// `Persona` at `persona.route()`.
pub fn explanation_route(persona: Persona) -> MethodRouter<AppState> {
    post(
        move |State(state): State<AppState>, AppJson(req): AppJson<ExcerptRequest>| async move {
            explain(&state, persona, req).await
        },
    )
}

/// Sends the excerpt to the provider under `persona` and wraps the text.
/// The provider output is returned unmodified.
pub async fn explain(
    state: &AppState,
    persona: Persona,
    req: ExcerptRequest,
) -> Result<Json<ExplanationResponse>, AppError> {
    info!(
        "Generating {:?} explanation for excerpt of {} bytes",
        persona,
        req.excerpt.len()
    );

    let user = build_user_message(&req.excerpt);
    let explanation = state.llm.generate(persona.system_prompt(), &user).await?;

    Ok(Json(ExplanationResponse { explanation }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::explanation::prompts::{LITERAL_SYSTEM, USER_PREFIX};
    use crate::llm_client::stub::{RecordedCall, StubProvider};
    use crate::llm_client::LlmError;

    fn state_with(stub: &Arc<StubProvider>) -> AppState {
        AppState {
            llm: stub.clone(),
        }
    }

    #[tokio::test]
    async fn test_explain_passes_provider_text_through() {
        let stub = Arc::new(StubProvider::replying("  **Raw** output\n"));
        let state = state_with(&stub);

        let Json(response) = explain(
            &state,
            Persona::Literal,
            ExcerptRequest {
                excerpt: "Genesis 1:1".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.explanation, "  **Raw** output\n");
        assert_eq!(
            stub.calls(),
            vec![RecordedCall {
                system: LITERAL_SYSTEM.to_string(),
                user: format!("{USER_PREFIX}Genesis 1:1"),
            }]
        );
    }

    #[tokio::test]
    async fn test_explain_maps_provider_failure_to_app_error() {
        let stub = Arc::new(StubProvider::failing("connection reset"));
        let state = state_with(&stub);

        let err = explain(
            &state,
            Persona::Simple,
            ExcerptRequest {
                excerpt: String::new(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Provider(LlmError::Api { .. })));
        assert_eq!(stub.calls().len(), 1);
    }

    #[test]
    fn test_excerpt_request_requires_string_excerpt() {
        assert!(serde_json::from_str::<ExcerptRequest>(r#"{"excerpt": "Psalm 23"}"#).is_ok());
        assert!(serde_json::from_str::<ExcerptRequest>(r#"{"excerpt": 23}"#).is_err());
        assert!(serde_json::from_str::<ExcerptRequest>(r#"{"text": "Psalm 23"}"#).is_err());
    }

    #[test]
    fn test_explanation_response_shape() {
        let value = serde_json::to_value(ExplanationResponse {
            explanation: "text".to_string(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"explanation": "text"}));
    }
}
