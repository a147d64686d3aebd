use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

/// Reject a derived amount that overflowed to infinity; JSON has no encoding for it.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64, ServiceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ServiceError::Validation(format!("{} is out of range", field)))
    }
}
