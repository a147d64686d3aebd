use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
#[error("{status}: {detail}")]
pub struct JsonApiError {
    status: StatusCode,
    detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn status(&self) -> StatusCode { self.status }

    pub fn detail(&self) -> &str { &self.detail }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"detail": self.detail}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Validation(msg) => JsonApiError::unprocessable(msg),
            other => {
                error!(err = %other, "request failed on datastore");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

// Malformed or mistyped input of any kind is a client error.
impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { JsonApiError::unprocessable(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { JsonApiError::unprocessable(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { JsonApiError::unprocessable(r.body_text()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_status_codes() {
        let nf = JsonApiError::from(ServiceError::not_found("Order"));
        assert_eq!(nf.status(), StatusCode::NOT_FOUND);
        assert_eq!(nf.detail(), "Order not found");

        let bad = JsonApiError::from(ServiceError::Validation("quantity".into()));
        assert_eq!(bad.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let db = JsonApiError::from(ServiceError::Model(ModelError::Db("connection reset".into())));
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.detail(), "Internal Server Error");
    }
}
