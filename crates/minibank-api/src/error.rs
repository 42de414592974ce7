//! Mapping from core errors to HTTP responses.
//!
//! Every failure body has the shape `{"message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use minibank_types::{BankError, ErrorKind};

use crate::dto::MessageResponse;

/// An error ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Client-facing message.
    pub message: String,
}

impl ApiErrorResponse {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

impl From<BankError> for ApiErrorResponse {
    fn from(error: BankError) -> Self {
        let status = match error.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => {
                // Details stay in the logs.
                tracing::error!(code = error.code(), %error, "Internal error");
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            }
        };
        Self::new(status, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_kind() {
        let cases = [
            (BankError::DuplicateId, StatusCode::BAD_REQUEST),
            (BankError::InvalidWithdrawAmount, StatusCode::BAD_REQUEST),
            (BankError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (BankError::AccountNotFound, StatusCode::NOT_FOUND),
        ];
        for (error, expected) in cases {
            let message = error.to_string();
            let response = ApiErrorResponse::from(error);
            assert_eq!(response.status, expected);
            assert_eq!(response.message, message);
        }
    }

    #[test]
    fn internal_details_are_hidden() {
        let response = ApiErrorResponse::from(BankError::Internal("lock table exploded".into()));
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.message, "Internal server error");
    }
}
