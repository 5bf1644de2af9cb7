//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::chat::{ChatError, ErrorKind};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    supported: Option<Vec<String>>,
}

/// Build a JSON error response.
pub fn error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            code,
            message: message.into(),
            supported: None,
        },
    };
    (status, Json(body)).into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    error(StatusCode::BAD_REQUEST, ErrorKind::InvalidRequest.as_str(), message)
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = match kind {
            ErrorKind::InvalidRequest | ErrorKind::UnsupportedProvider => StatusCode::BAD_REQUEST,
            ErrorKind::ProviderCall | ErrorKind::ResponseParse => StatusCode::BAD_GATEWAY,
        };
        let supported = match &self {
            ChatError::UnsupportedProvider(e) => Some(e.supported.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: kind.as_str(),
                message: self.to_string(),
                supported,
            },
        };
        (status, Json(body)).into_response()
    }
}
