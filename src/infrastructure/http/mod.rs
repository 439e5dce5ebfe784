//! HTTP transport for the generator.
//!
//! | route                          | handler            |
//! |--------------------------------|--------------------|
//! | `GET /`                        | service status     |
//! | `GET /list_languages`          | supported targets  |
//! | `POST /{language}/generate_sdk`| zip archive        |

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value as JsonValue, json};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::application::{ApplicationError, CodegenRequest, GenerateSdkUseCase};
use crate::config::ServerConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<GenerateSdkUseCase>,
}

impl AppState {
    pub fn new(use_case: Arc<GenerateSdkUseCase>) -> Self {
        Self { use_case }
    }
}

/// Build the router with all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/list_languages", get(list_languages))
        .route("/{language}/generate_sdk", post(generate_sdk))
        .with_state(state)
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server on {}", addr);

    axum::serve(listener, router(state)).await
}

/// Service status.
async fn root() -> Json<JsonValue> {
    Json(json!({"name": "Codegen", "status": "OK", "version": "1.0.0"}))
}

/// Supported target keys.
async fn list_languages(State(state): State<AppState>) -> Json<JsonValue> {
    let targets = state.use_case.generator().resolver().supported_targets();
    Json(json!({ "supported_options": targets }))
}

/// Generate an SDK archive for the target named in the path.
async fn generate_sdk(
    State(state): State<AppState>,
    Path(language): Path<String>,
    body: Bytes,
) -> Response {
    let request = match CodegenRequest::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected codegen request: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    match state.use_case.execute(&language, &request) {
        Ok(response) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/zip".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={}", response.file_name),
                ),
            ],
            response.archive,
        )
            .into_response(),
        Err(ApplicationError::ValidationError(e)) => {
            warn!("Rejected codegen request: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error generating code").into_response()
        }
    }
}
