//! HTTP request handlers.

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use corpmap_core::CorpmapError;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Failure of a request, rendered as a 500 JSON body.
///
/// Outside debug mode the body carries a generic message only.
#[derive(Debug)]
pub struct ApiError {
    error: CorpmapError,
    debug: bool,
}

impl ApiError {
    pub fn new(error: CorpmapError, debug: bool) -> Self {
        Self { error, debug }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = if self.debug {
            self.error.to_string()
        } else {
            "Internal Server Error".to_string()
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "error": message})),
        )
            .into_response()
    }
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Landing page.
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/companies`: the directory document, read fresh for this request.
pub async fn handle_list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    match state.service.list_companies().await {
        Ok(document) => Ok(Json(document)),
        Err(e) => {
            error!(
                "Failed to load companies from {}: {}",
                state.service.source_description(),
                e
            );
            Err(ApiError::new(e, state.debug))
        }
    }
}
