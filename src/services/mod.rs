//! Service layer: use-case orchestration and the error taxonomy rendered by
//! the HTTP layer.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field is missing from the request.
    #[error("{0}")]
    Validation(String),

    /// The referenced customer does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The business key is already taken by another customer.
    #[error("{0}")]
    Conflict(String),

    /// The storage layer failed; the detail is logged, not exposed.
    #[error("Internal server error.")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Repository(err) = self {
            log::error!("Repository failure: {err}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}
