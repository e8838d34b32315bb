use axum::http::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[derive(Debug)]
pub enum AvatarApiError {
    NoFile,
    InvalidStyle,
    InvalidImage,
    RateLimited,
    Unauthorized,
    EndpointUnavailable,
    Upstream { status: StatusCode, body: String },
    EmptyResult,
    Internal,
}

impl AvatarApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::NoFile => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "No file uploaded".to_string(),
            },
            Self::InvalidStyle => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid style selected".to_string(),
            },
            Self::InvalidImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Uploaded file is not a valid image.".to_string(),
            },
            Self::RateLimited => ApiError {
                code: StatusCode::TOO_MANY_REQUESTS,
                message: "Rate limit exceeded on Segmind API.".to_string(),
            },
            Self::Unauthorized => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid or expired API key.".to_string(),
            },
            Self::EndpointUnavailable => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "The requested model endpoint is not available.".to_string(),
            },
            Self::Upstream { status, body } => ApiError {
                code: passthrough_status(*status),
                message: body.to_string(),
            },
            Self::EmptyResult => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Segmind API returned no image.".to_string(),
            },
            Self::Internal => DefaultApiError::InternalServerError.value(),
        }
    }

    pub fn from_upstream(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::EndpointUnavailable,
            _ => Self::Upstream { status, body },
        }
    }
}

// A relayed status must still read as a failure to the caller.
fn passthrough_status(status: StatusCode) -> StatusCode {
    if status.is_client_error() || status.is_server_error() {
        status
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_upstream_statuses() {
        let cases = [
            (StatusCode::TOO_MANY_REQUESTS, StatusCode::TOO_MANY_REQUESTS),
            (StatusCode::UNAUTHORIZED, StatusCode::UNAUTHORIZED),
            (StatusCode::NOT_FOUND, StatusCode::NOT_FOUND),
        ];

        for (upstream, expected) in cases {
            let err = AvatarApiError::from_upstream(upstream, "ignored".to_string());
            let api_error = err.value();
            assert_eq!(api_error.code, expected);
            assert_ne!(api_error.message, "ignored");
        }
    }

    #[test]
    fn relays_other_upstream_failures_verbatim() {
        let body = r#"{"error": "model is warming up"}"#.to_string();
        let api_error =
            AvatarApiError::from_upstream(StatusCode::SERVICE_UNAVAILABLE, body.clone()).value();

        assert_eq!(api_error.code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.message, body);
    }

    #[test]
    fn non_error_upstream_statuses_become_500() {
        let api_error = AvatarApiError::from_upstream(StatusCode::ACCEPTED, String::new()).value();
        assert_eq!(api_error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_errors_are_opaque() {
        let api_error = AvatarApiError::Internal.value();
        assert_eq!(api_error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Internal server error");
    }
}
