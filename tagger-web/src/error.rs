//! Mapping of library errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use tagger_serve::TaggerError;

/// Per-request failures surfaced to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The request is at fault: bad multipart framing, missing `file`
    /// field, or bytes that do not decode as an image.
    BadRequest(String),

    /// The model failed on a well-formed request.
    Inference(String),
}

impl From<TaggerError> for ApiError {
    fn from(err: TaggerError) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Inference(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Inference(msg) => {
                error!("inference failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "inference failed".to_owned())
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_requests_map_to_400() {
        let response = ApiError::BadRequest("missing `file` field".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn inference_failures_map_to_500() {
        let response = ApiError::Inference("boom".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn decode_errors_are_client_errors() {
        let err = tagger_serve::decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }
}
