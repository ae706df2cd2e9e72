use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::core::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    question: String,
}

/// `POST /chat`: answer a question about TEK17 chapter 11.
///
/// Empty or missing questions are rejected before the engine runs.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate_question(&payload.question)?;

    let answer = state.engine.answer(&payload.question).await?;
    Ok(Json(json!({ "answer": answer })))
}

fn validate_question(question: &str) -> Result<(), ApiError> {
    if question.trim().is_empty() {
        return Err(ApiError::BadRequest("question must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_questions_are_rejected() {
        assert!(validate_question("").is_err());
        assert!(validate_question("   \n\t").is_err());
        assert!(validate_question("hva er en branncelle?").is_ok());
    }
}
