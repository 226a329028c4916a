use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_core::RosterError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing error: a status code plus the message rendered to the client.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.message }));

        (self.status, body).into_response()
    }
}

// Convert from roster operation errors; Display strings double as the
// client-visible messages.
impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::ActivityNotFound => Self::not_found(err.to_string()),
            RosterError::AlreadyRegistered | RosterError::NotRegistered => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_activity_maps_to_404() {
        let err = ApiError::from(RosterError::ActivityNotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Activity not found");
    }

    #[test]
    fn duplicate_signup_maps_to_400() {
        let err = ApiError::from(RosterError::AlreadyRegistered);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Student is already signed up for this activity");
    }

    #[test]
    fn absent_unregister_maps_to_400() {
        let err = ApiError::from(RosterError::NotRegistered);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Student is not signed up for this activity");
    }
}
