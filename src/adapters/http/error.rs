//! API error type shared by every HTTP handler.
//!
//! Every failure leaves the service as `{"message": "..."}` with a status
//! code. Application errors are mapped through [`IntoApiError`], which each
//! area implements next to its handlers; the caller supplies the generic
//! message used when the failure is internal.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Standard error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An HTTP failure: status, client-facing message, and for 5xx the internal
/// cause that gets logged but never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    cause: Option<String>,
}

impl ApiError {
    /// Client-facing failure with an arbitrary status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            cause: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            cause: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            cause: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
            cause: None,
        }
    }

    /// Internal failure with a generic message; `cause` is only logged.
    pub fn internal(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = self.status.as_u16(),
                cause = self.cause.as_deref().unwrap_or("unknown"),
                "{}",
                self.message
            );
        }
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

/// Rewrites error responses produced outside the handlers (body limit,
/// timeout, unmatched method) into the standard `{message}` body.
///
/// Responses that already carry JSON, and non-error responses, pass through.
pub async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let message = match status {
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::REQUEST_TIMEOUT => "Request timed out",
        StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
        other => other.canonical_reason().unwrap_or("Request failed"),
    };
    ApiError::new(status, message).into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"))
}

/// Conversion from an application error into an [`ApiError`].
///
/// `failure` is the generic message for internal errors, e.g.
/// "Failed to fetch courses".
pub trait IntoApiError {
    fn into_api_error(self, failure: &'static str) -> ApiError;
}

/// `Result` adapter so handlers can write `.or_fail("Failed to ...")?`.
pub trait ApiResultExt<T> {
    fn or_fail(self, failure: &'static str) -> Result<T, ApiError>;
}

impl<T, E: IntoApiError> ApiResultExt<T> for Result<T, E> {
    fn or_fail(self, failure: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| err.into_api_error(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_message_body() {
        let response = ApiError::not_found("Course not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Course not found" })
        );
    }

    #[tokio::test]
    async fn internal_error_hides_cause() {
        let response =
            ApiError::internal("Failed to fetch courses", "[STORAGE_ERROR] disk on fire").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to fetch courses");
        assert!(!body.to_string().contains("disk on fire"));
    }

    #[tokio::test]
    async fn plain_text_error_is_rewritten_as_message_body() {
        let plain = (StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded").into_response();
        let response = json_error_body(plain).await;

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Request body too large" })
        );
    }

    #[tokio::test]
    async fn bodiless_timeout_gets_message_body() {
        let response = json_error_body(StatusCode::REQUEST_TIMEOUT.into_response()).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body_json(response).await["message"], "Request timed out");
    }

    #[tokio::test]
    async fn json_errors_and_successes_pass_through() {
        let api = json_error_body(ApiError::not_found("Course not found").into_response()).await;
        assert_eq!(body_json(api).await["message"], "Course not found");

        let ok = json_error_body((StatusCode::OK, "fine").into_response()).await;
        assert_eq!(ok.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(ok.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"fine");
    }

    #[test]
    fn or_fail_maps_error_with_failure_message() {
        struct Boom;
        impl IntoApiError for Boom {
            fn into_api_error(self, failure: &'static str) -> ApiError {
                ApiError::internal(failure, "boom")
            }
        }

        let result: Result<(), Boom> = Err(Boom);
        let err = result.or_fail("Failed to do the thing").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to do the thing");
    }
}
