use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Router fallback for unknown paths.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    let body = ErrorResponse::new(
        StatusCode::NOT_FOUND,
        format!("Recurso não encontrado: {}", uri.path()),
    );

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
