// errors.rs
use thiserror::Error;

use crate::domain::FilterError;

/// Errors originating from either the server logic
/// (routing, missing resources, bad filters) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Configuration Error: {0}")]
    ConfigError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<FilterError> for ServerError {
    fn from(err: FilterError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
