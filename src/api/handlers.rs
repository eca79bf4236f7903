//! API request handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::types::AskRequest;
use crate::api::types::AskResponse;
use crate::api::types::ErrorResponse;
use crate::matcher::Matcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<Matcher>,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }
}

/// Error returned from a handler, rendered as `{"error": ...}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UnsupportedMediaType(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::MissingJsonContentType(_) => {
                Self::UnsupportedMediaType(rejection.body_text())
            }
            _ => Self::BadRequest(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(m) | Self::UnsupportedMediaType(m) | Self::Internal(m) => m,
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Answer a user message (POST /ask)
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(value) = payload?;
    let request = AskRequest::from_json(value).map_err(ApiError::BadRequest)?;

    info!("POST /ask: {} chars", request.message.chars().count());

    let matcher = Arc::clone(&state.matcher);
    let reply = tokio::task::spawn_blocking(move || matcher.answer(&request.message))
        .await
        .map_err(|e| {
            error!("Matching task failed: {}", e);
            ApiError::Internal("matching task failed".to_string())
        })?
        .map_err(|e| {
            error!("Error answering message: {}", e);
            ApiError::Internal(e.to_string())
        })?;

    Ok(Json(AskResponse { reply }))
}
