use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_optimizer::error::{DirectionsError, OptimizeError};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    BadGateway(String),
}

impl From<OptimizeError> for ApiError {
    fn from(error: OptimizeError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<DirectionsError> for ApiError {
    fn from(error: DirectionsError) -> Self {
        match error {
            DirectionsError::InvalidEndpoints => ApiError::BadRequest(error.to_string()),
            DirectionsError::Provider(_) => ApiError::BadGateway(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message).into_response(),
        }
    }
}
