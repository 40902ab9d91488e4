//! Business assistant handler.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;

use crate::clients::FALLBACK_REPLY;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssistantRequest {
    #[schema(example = "How can I reach export markets?")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssistantResponse {
    pub response: String,
}

/// Create assistant routes
pub fn assistant_routes() -> Router<AppState> {
    Router::new().route("/", post(ask))
}

/// Ask the business assistant
///
/// Assistant failures are answered with a fixed apology, never a 5xx.
#[utoipa::path(
    post,
    path = "/api/ai-assistant",
    tag = "Assistant",
    request_body = AssistantRequest,
    responses(
        (status = 200, description = "Assistant reply", body = AssistantResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn ask(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AssistantRequest>,
) -> AppResult<Json<AssistantResponse>> {
    let response = match state.assistant.reply(&payload.message).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Assistant failed, sending fallback reply");
            FALLBACK_REPLY.to_string()
        }
    };

    Ok(Json(AssistantResponse { response }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clients::MockAssistant;
    use crate::config::GatewayConfig;
    use common::AppError;
    use storage_service_lib::MemStorage;

    fn state_with(assistant: MockAssistant) -> AppState {
        let mut state = AppState::with_storage(Arc::new(MemStorage::new()), GatewayConfig::default());
        state.assistant = Arc::new(assistant);
        state
    }

    #[tokio::test]
    async fn test_assistant_failure_uses_fallback() {
        let mut assistant = MockAssistant::new();
        assistant
            .expect_reply()
            .returning(|_| Err(AppError::internal("completion timed out")));

        let Json(body) = ask(
            State(state_with(assistant)),
            ValidatedJson(AssistantRequest {
                message: "hello".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.response, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_assistant_reply_passed_through() {
        let mut assistant = MockAssistant::new();
        assistant
            .expect_reply()
            .withf(|message| message == "hello")
            .returning(|_| Ok("hi there".to_string()));

        let Json(body) = ask(
            State(state_with(assistant)),
            ValidatedJson(AssistantRequest {
                message: "hello".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.response, "hi there");
    }
}
