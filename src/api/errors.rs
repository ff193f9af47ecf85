use serde::Deserialize;

use crate::error::AppError;

/// Error body sent by the remote API, e.g. `{"error": "Missing required fields"}`.
/// The hosted database reports the same thing as `{"message": ...}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

/// Turn a non-success response into an [`AppError`].
///
/// 401 is always [`AppError::Unauthorized`], whatever the endpoint. Other
/// statuses carry the body's `error` (or `message`) when there is one, else the
/// canonical reason phrase.
pub async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), status.canonical_reason(), &body))
}

fn status_error(status: u16, reason: Option<&str>, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.is_empty())
        .or_else(|| reason.map(String::from))
        .unwrap_or_else(|| "Unexpected response".to_string());

    AppError::Status { status, message }
}

/// Converts AppError into HTTP responses for the proxy routes.
#[cfg(feature = "ssr")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Status { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message.clone(),
            ),
            AppError::Network(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Upstream unreachable: {}", msg),
            ),
            AppError::Parse(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Config(msg) | AppError::Storage(msg) | AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}
